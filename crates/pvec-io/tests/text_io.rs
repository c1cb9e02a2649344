//! End-to-end tests for reading and writing vector text.

use approx::assert_relative_eq;
use pvec_io::{
    format_hex, format_vector, parse_color, parse_vector, ColorReader, IoState, TextReader,
    TextWriter, WriteMode,
};
use pvec_math::{vec3, vec4, DVec3, Vec2, Vec3, Vec4, Vector};

// ============================================================================
// Decimal round trips
// ============================================================================

#[test]
fn test_decimal_round_trip_floats() {
    let samples = [
        vec3(3.0f32, 2.0, 1.5),
        vec3(-0.1, 1e-7, 12345.678),
        vec3(f32::MAX, f32::MIN_POSITIVE, 0.0),
    ];
    for v in samples {
        let text = format_vector(&v);
        assert_eq!(parse_vector::<f32, 3>(&text).unwrap(), v, "{text}");
    }
}

#[test]
fn test_non_finite_round_trip() {
    let v = vec3(f64::NAN, f64::INFINITY, 1.0);
    let text = format_vector(&v);
    assert_eq!(text, "NaN inf 1");

    let back = parse_vector::<f64, 3>(&text).unwrap();
    assert!(back.x().is_nan());
    assert_eq!(back.y(), f64::INFINITY);
    assert_eq!(back.z(), 1.0);

    let zero_unit = format_vector(&DVec3::zero().normalize());
    let back = parse_vector::<f64, 3>(&zero_unit).unwrap();
    assert!(back.iter().all(|c| c.is_nan()));

    let mut v = Vec2::zero();
    let mut r = TextReader::new("-Infinity nan");
    r.read_vector(&mut v);
    assert!(!r.fail());
    assert_eq!(v.x(), f32::NEG_INFINITY);
    assert!(v.y().is_nan());
}

#[test]
fn test_decimal_round_trip_integers() {
    let v = Vector::<i64, 4>::new([i64::MIN, -1, 0, i64::MAX]);
    assert_eq!(parse_vector::<i64, 4>(&format_vector(&v)).unwrap(), v);

    let v = vec3(0u8, 128, 255);
    assert_eq!(parse_vector::<u8, 3>(&format_vector(&v)).unwrap(), v);
}

#[test]
fn test_written_stream_reads_back() {
    let mut w = TextWriter::new(String::new());
    w.write_vector(&vec3(1.0f64, 2.0, 3.0))
        .write_str("\n")
        .write_vector(&vec3(4.0f64, 5.0, 6.0));
    let text = w.finish().unwrap();

    let mut a = DVec3::zero();
    let mut b = DVec3::zero();
    let mut r = TextReader::new(&text);
    r.read_vector(&mut a).read_vector(&mut b);
    assert!(!r.fail());
    assert_eq!(r.state(), IoState::EOF);
    assert_eq!((a, b), (vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)));
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_color_list() {
    let mut r = TextReader::new("red 0x00ff00 0 0 1 yellow");
    let mut colors = [Vector::<u8, 3>::zero(); 4];
    for c in &mut colors {
        r.read_color(ColorReader::new(c));
    }
    assert!(!r.fail());
    assert_eq!(
        colors,
        [vec3(255, 0, 0), vec3(0, 255, 0), vec3(0, 0, 255), vec3(255, 255, 0)]
    );
}

#[test]
fn test_color_failure_stops_stream() {
    let mut a = Vec3::zero();
    let mut b = Vec3::zero();
    let mut r = TextReader::new("purple red");
    r.read_color(ColorReader::new(&mut a)).read_color(ColorReader::new(&mut b));
    assert!(r.fail());
    assert_eq!(b, Vec3::zero());
}

#[test]
fn test_hex_write_is_reversed_on_read() {
    let c = vec3(0x11u8, 0x22, 0x33);
    let hex = format_hex(&c);
    assert_eq!(hex, "0x332211");
    let back: Vector<u8, 3> = parse_color(&hex).unwrap();
    assert_eq!(back, vec3(0x33, 0x22, 0x11));
}

#[test]
fn test_rgba_alpha_sources() {
    let c: Vec4 = parse_color("0xFFAA22").unwrap();
    assert_relative_eq!(c.a(), 1.0);

    let mut c = Vec4::zero();
    let mut r = TextReader::new("cyan");
    r.read_color(ColorReader::new(&mut c).with_alpha(0.25));
    assert_eq!(c, vec4(0.0, 1.0, 1.0, 0.25));

    let c: Vector<u16, 4> = parse_color("0x0000FF00").unwrap();
    assert_eq!(c, vec4(0, 0, 65535, 0));
}

#[test]
fn test_hex_mode_writer() {
    let mut w = TextWriter::new(String::new()).with_mode(WriteMode::Hex);
    w.write_vector(&Vec2::new([1.0, 0.0]));
    assert_eq!(w.into_inner(), "0x00ff");
}
