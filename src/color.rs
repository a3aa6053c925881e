//! Colors

use std::ops::Deref;

/// Gray scale intensity, 0 is black and 255 is white
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Gray8(pub u8);

impl Deref for Gray8 {
    type Target = u8;
    fn deref(&self) -> &u8 {
        &self.0
    }
}
impl Gray8 {
    /// Create a new gray scale value
    pub fn new(g: u8) -> Self {
        Gray8( g )
    }
    /// White (255)
    pub fn white() -> Self {
        Self::new(255)
    }
    /// Black (0)
    pub fn black() -> Self {
        Self::new(0)
    }
    /// Intensity as u8
    pub fn value(&self) -> u8 {
        self.0
    }
}
