use algolab::format_number;
use algolab::utils::duration_ms;
use std::time::Duration;

#[test]
fn test_format_number_basic() {
    assert_eq!(format_number(123), "123");
    assert_eq!(format_number(1234), "1,234");
    assert_eq!(format_number(12345), "12,345");
}

#[test]
fn test_format_number_large() {
    assert_eq!(format_number(123456), "123,456");
    assert_eq!(format_number(1234567), "1,234,567");
    assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
}

#[test]
fn test_format_number_edge_cases() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(12), "12");
    assert_eq!(format_number(100), "100");
    assert_eq!(format_number(1000), "1,000");
}

#[test]
fn test_duration_ms() {
    assert_eq!(duration_ms(Duration::from_millis(250)), 250.0);
    assert!((duration_ms(Duration::from_micros(1500)) - 1.5).abs() < 1e-9);
}
