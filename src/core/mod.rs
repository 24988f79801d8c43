//! Conversion core: the TeX parser and the MathML tree it produces

pub mod mathml;
pub mod tex2mml;
