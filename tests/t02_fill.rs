
use grayfill::{EdgeTable, Gray8, PixelData, PixfmtGray8, Rasterizer, RenderingBase, Rect, ScanBounds};

fn fill(text: &str, w: usize, h: usize, c: u8) -> RenderingBase {
    let mut ras = Rasterizer::with_edges(EdgeTable::parse(text).unwrap());
    let mut base = RenderingBase::new(PixfmtGray8::new(w, h));
    {
        let mut ren = base.lock();
        let report = ras.fill(&mut ren, Gray8::new(c));
        assert!(report.is_clean());
    }
    base
}

const SQUARE: &str = "0 0 10 0\n10 0 10 10\n10 10 0 10\n0 10 0 0";
const TRIANGLE: &str = "0 0 10 0\n10 0 5 10\n5 10 0 0";

#[test]
fn t02_rectangle() {
    let base = fill(SQUARE, 16, 16, 255);
    for y in 0..16 {
        let row = base.pixf.row(y);
        for x in 0..16 {
            let inside = y < 10 && x <= 10;
            assert_eq!(row[x] == 255, inside, "pixel {} {}", x, y);
        }
    }
}

#[test]
fn t02_triangle() {
    let base = fill(TRIANGLE, 12, 12, 200);
    let row1: Vec<_> = (0..12).filter(|&x| base.pixf.row(1)[x] == 200).collect();
    assert_eq!(row1, (0..=9).collect::<Vec<_>>());
    let row9: Vec<_> = (0..12).filter(|&x| base.pixf.row(9)[x] == 200).collect();
    assert_eq!(row9, vec![4, 5]);
    assert!(base.pixf.row(10).iter().all(|&p| p == 0));
}

#[test]
fn t02_leaf_with_hole() {
    let text = std::fs::read_to_string("tests/data/leaf-fill.txt").unwrap();
    let mut ras = Rasterizer::with_edges(EdgeTable::parse(&text).unwrap());
    let mut base = RenderingBase::new(PixfmtGray8::new(100, 100));
    let report = ras.fill(&mut base.lock(), Gray8::white());
    assert!(report.is_clean());
    assert_eq!(report.scanlines, 65);

    assert_eq!(base.pixf.get((50, 20)), Gray8::white());
    // inside the triangular hole
    assert_eq!(base.pixf.get((50, 38)), Gray8::black());
    assert_eq!(base.pixf.get((5, 5)), Gray8::black());
    assert_eq!(base.take_dirty(), Some(Rect::new(30, 10, 69, 74)));
}

#[test]
fn t02_reference_top_only_bounds() {
    // Stops at the lowest top (y = 60) instead of the bottom vertex (y = 75)
    let text = std::fs::read_to_string("tests/data/leaf-fill.txt").unwrap();
    let mut ras = Rasterizer::with_edges(EdgeTable::parse(&text).unwrap());
    ras.bounds(ScanBounds::TopOnly);
    let mut base = RenderingBase::new(PixfmtGray8::new(100, 100));
    let report = ras.fill(&mut base.lock(), Gray8::white());
    assert_eq!(report.scanlines, 50);
    assert_eq!(base.pixf.get((50, 59)), Gray8::white());
    assert_eq!(base.pixf.get((50, 65)), Gray8::black());
}

#[test]
fn t02_clipped_to_surface() {
    let text = "-5 -5 50 -5\n50 -5 50 50\n50 50 -5 50\n-5 50 -5 -5";
    let base = fill(text, 8, 6, 77);
    assert!(base.pixeldata().iter().all(|&p| p == 77));
}

#[test]
fn t02_same_edges_same_pixels() {
    let a = fill(TRIANGLE, 12, 12, 180);
    let b = fill(TRIANGLE, 12, 12, 180);
    assert_eq!(a.pixeldata(), b.pixeldata());
}

#[test]
fn t02_fill_twice_idempotent() {
    let mut ras = Rasterizer::with_edges(EdgeTable::parse(TRIANGLE).unwrap());
    let mut once = RenderingBase::new(PixfmtGray8::new(12, 12));
    ras.fill(&mut once.lock(), Gray8::new(99));
    let mut twice = RenderingBase::new(PixfmtGray8::new(12, 12));
    {
        let mut ren = twice.lock();
        ras.fill(&mut ren, Gray8::new(99));
        ras.fill(&mut ren, Gray8::new(99));
    }
    assert_eq!(once.pixeldata(), twice.pixeldata());
}

#[test]
fn t02_write_and_read_back() {
    let base = fill(TRIANGLE, 12, 12, 200);
    let path = std::env::temp_dir().join(format!("grayfill_t02_{}.png", std::process::id()));
    base.to_file(&path).unwrap();
    let pix = PixfmtGray8::from_file(&path).unwrap();
    assert!(grayfill::ppm::img_diff(&path, &path).unwrap());
    std::fs::remove_file(&path).unwrap();
    assert_eq!(pix.pixeldata(), base.pixeldata());
}
