#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Byte order used when building test bodies.
#[derive(Clone, Copy)]
pub enum Order {
    Little,
    Big,
}

impl Order {
    pub fn format_name(self) -> &'static str {
        match self {
            Order::Little => "binary_little_endian",
            Order::Big => "binary_big_endian",
        }
    }
}

fn push<const N: usize>(out: &mut Vec<u8>, le: [u8; N], be: [u8; N], order: Order) {
    match order {
        Order::Little => out.extend_from_slice(&le),
        Order::Big => out.extend_from_slice(&be),
    }
}

/// Encode one value of PLY type `ty` independently of the library codecs.
pub fn encode_value(ty: &str, v: f64, order: Order, out: &mut Vec<u8>) {
    match ty {
        "char" | "int8" => push(out, (v as i8).to_le_bytes(), (v as i8).to_be_bytes(), order),
        "uchar" | "uint8" => push(out, (v as u8).to_le_bytes(), (v as u8).to_be_bytes(), order),
        "short" | "int16" => push(out, (v as i16).to_le_bytes(), (v as i16).to_be_bytes(), order),
        "ushort" | "uint16" => {
            push(out, (v as u16).to_le_bytes(), (v as u16).to_be_bytes(), order)
        }
        "int" | "int32" => push(out, (v as i32).to_le_bytes(), (v as i32).to_be_bytes(), order),
        "uint" | "uint32" => push(out, (v as u32).to_le_bytes(), (v as u32).to_be_bytes(), order),
        "float" | "float32" => {
            push(out, (v as f32).to_le_bytes(), (v as f32).to_be_bytes(), order)
        }
        "double" | "float64" => push(out, v.to_le_bytes(), v.to_be_bytes(), order),
        other => panic!("test helper does not know type {other}"),
    }
}

/// Header text with a single `vertex` element.
pub fn header(format: &str, vertex_count: usize, props: &[(&str, &str)]) -> String {
    let mut text = format!("ply\nformat {format} 1.0\nelement vertex {vertex_count}\n");
    for (ty, name) in props {
        text.push_str(&format!("property {ty} {name}\n"));
    }
    text.push_str("end_header\n");
    text
}

/// Complete binary PLY file whose body holds `rows` (one value per property).
pub fn binary_ply(order: Order, props: &[(&str, &str)], rows: &[Vec<f64>]) -> Vec<u8> {
    let mut bytes = header(order.format_name(), rows.len(), props).into_bytes();
    for row in rows {
        assert_eq!(row.len(), props.len(), "row width must match property count");
        for ((ty, _), v) in props.iter().zip(row) {
            encode_value(ty, *v, order, &mut bytes);
        }
    }
    bytes
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("fixture write should succeed");
    path
}

pub fn float_props<'a>(names: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    names.iter().map(|n| ("float", *n)).collect()
}

/// Property names of a 3D Gaussian splat file without normals or
/// higher-order SH coefficients.
pub fn splat_names() -> Vec<String> {
    let mut names: Vec<String> = ["x", "y", "z", "f_dc_0", "f_dc_1", "f_dc_2", "opacity"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend((0..3).map(|i| format!("scale_{i}")));
    names.extend((0..4).map(|i| format!("rot_{i}")));
    names
}

/// Property names of a full training-output splat file.
pub fn training_names() -> Vec<String> {
    let mut names: Vec<String> = ["x", "y", "z", "nx", "ny", "nz", "f_dc_0", "f_dc_1", "f_dc_2"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend((0..45).map(|i| format!("f_rest_{i}")));
    names.push("opacity".to_string());
    names.extend((0..3).map(|i| format!("scale_{i}")));
    names.extend((0..4).map(|i| format!("rot_{i}")));
    names
}

pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("temp dir should be readable")
        .map(|e| {
            e.expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
