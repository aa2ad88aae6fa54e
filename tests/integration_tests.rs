// tests/integration_tests.rs
use array_transform::*;

#[test]
fn test_reference_values() {
    let mut words = vec![0x01020304u32];
    byteswap32(&mut words);
    assert_eq!(words, vec![0x04030201]);

    let mut floats = vec![2.0f32, -3.0];
    scale_shift_f32(&mut floats, 2.0, 1.0);
    assert_eq!(floats, vec![5.0, -5.0]);

    let mut floats = vec![1.0f32];
    scale_shift_f32(&mut floats, 1.0, 5.0);
    assert_eq!(floats, vec![6.0]);

    let mut floats = vec![4.0f32];
    scale_shift_f32(&mut floats, 2.0, 0.0);
    assert_eq!(floats, vec![8.0]);

    let mut ints = vec![10];
    scale_shift_i32(&mut ints, 1, 0);
    assert_eq!(ints, vec![10]);

    let mut ints = vec![3];
    scale_shift_i32(&mut ints, 4, 2);
    assert_eq!(ints, vec![14]);
}

#[test]
fn test_empty_buffers() {
    for execution in [
        Execution::Sequential,
        Execution::Parallel { min_len: 1 },
        Execution::Threads(8),
    ] {
        let mut words: Vec<u32> = Vec::new();
        byteswap32_with(&mut words, execution);
        assert!(words.is_empty());

        let mut floats: Vec<f32> = Vec::new();
        scale_shift_f32_with(&mut floats, 2.0, 1.0, execution);
        assert!(floats.is_empty());

        let mut ints: Vec<i32> = Vec::new();
        scale_shift_i32_with(&mut ints, 2, 1, execution);
        assert!(ints.is_empty());

        let mut bytes: Vec<u8> = Vec::new();
        byteswap32_bytes_with(&mut bytes, execution).unwrap();
        assert!(bytes.is_empty());

        let mut groups: Vec<[u8; 4]> = Vec::new();
        assert_eq!(byteswap32_pod_with(&mut groups, execution), Ok(()));
        assert!(groups.is_empty());

        let mut floats: Vec<f32> = Vec::new();
        assert_eq!(byteswap32_pod_with(&mut floats, execution), Ok(()));
        assert!(floats.is_empty());
    }
}

#[test]
fn test_big_endian_file_payload() {
    // A big-endian record of three f32 samples, decoded then calibrated
    let samples = [1.0f32, -2.0, 0.5];
    let mut payload: Vec<u8> = samples.iter().flat_map(|s| s.to_be_bytes()).collect();

    if cfg!(target_endian = "little") {
        byteswap32_bytes(&mut payload).unwrap();
    }

    let mut decoded: Vec<f32> = payload
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(decoded, samples);

    scale_shift_f32(&mut decoded, 10.0, 1.0);
    assert_eq!(decoded, vec![11.0, -19.0, 6.0]);
}

#[test]
fn test_pod_swap_then_transform() {
    let mut ints: Vec<i32> = vec![1, 2, 3].into_iter().map(i32::swap_bytes).collect();
    byteswap32_pod(&mut ints).unwrap();
    assert_eq!(ints, vec![1, 2, 3]);

    scale_shift_i32_checked(&mut ints, 100, -1).unwrap();
    assert_eq!(ints, vec![99, 199, 299]);
}

#[test]
fn test_scale_shift_struct() {
    let transform = ScaleShift::new(0.5f32, 0.0);
    assert_eq!(transform.branch(), Branch::ScaleOnly);

    let mut data = vec![2.0f32, 4.0, 8.0];
    transform.apply(&mut data);
    assert_eq!(data, vec![1.0, 2.0, 4.0]);
    assert_eq!(transform.apply_value(16.0), 8.0);
}

#[test]
fn test_checked_error_reports_first_overflow() {
    let mut data = vec![0, 1, i32::MIN, i32::MIN];
    let result = scale_shift_i32_checked(&mut data, -1, 0);
    match result {
        Err(TransformError::Overflow { index, value }) => {
            assert_eq!(index, 2);
            assert_eq!(value, i32::MIN);
        }
        other => panic!("Expected overflow, got {:?}", other),
    }
    assert_eq!(data, vec![0, 1, i32::MIN, i32::MIN]);
}
