use super::*;

#[test]
fn filemode_renders_common_modes() {
    let cases: &[(u32, &str)] = &[
        (0o100_644, "-rw-r--r--"),
        (0o100_755, "-rwxr-xr-x"),
        (0o100_000, "----------"),
        (0o100_777, "-rwxrwxrwx"),
        (0o040_755, "drwxr-xr-x"),
        (0o120_777, "lrwxrwxrwx"),
        (0o020_620, "crw--w----"),
        (0o060_660, "brw-rw----"),
        (0o010_644, "prw-r--r--"),
        (0o140_755, "srwxr-xr-x"),
    ];

    for (mode, expected) in cases {
        let got = filemode(*mode);
        assert_eq!(got, *expected, "filemode({mode:o}) should be {expected}");
    }
}

#[test]
fn filemode_renders_special_bits() {
    let cases: &[(u32, &str)] = &[
        (0o104_755, "-rwsr-xr-x"),
        (0o104_644, "-rwSr--r--"),
        (0o102_755, "-rwxr-sr-x"),
        (0o102_745, "-rwxr-Sr-x"),
        (0o041_777, "drwxrwxrwt"),
        (0o041_776, "drwxrwxrwT"),
    ];

    for (mode, expected) in cases {
        assert_eq!(filemode(*mode), *expected, "mode {mode:o}");
    }
}

#[test]
fn filemode_unknown_type_falls_back_to_dash() {
    assert_eq!(filemode(0o644), "-rw-r--r--");
    assert_eq!(filemode(0o644).chars().count(), 10);
}

#[cfg(not(unix))]
#[test]
fn synthesized_mode_is_a_regular_file() {
    assert_eq!(filemode(synthesize_mode(true)), "-r--r--r--");
    assert_eq!(filemode(synthesize_mode(false)), "-rw-rw-rw-");
}
