#![allow(dead_code)]

pub mod onnx_fixtures;
pub mod test_utils;
