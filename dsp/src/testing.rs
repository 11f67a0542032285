//! Tolerance helpers shared by unit and integration tests.
use super::{abs, max};

pub fn isclose(a: f32, b: f32, rtol: f32, atol: f32) -> bool {
    abs(a - b) <= max(abs(a), abs(b)) * rtol + atol
}

pub fn allclose(a: &[f32], b: &[f32], rtol: f32, atol: f32) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(a, b)| isclose(*a, *b, rtol, atol))
}
