const MAX: u32 = 0xFF_u32;
static PI: f64 = 3.141_59;
let big = 1e10;
let range = 0..=9;
let c = '\n';
let b = b'x';
let bytes = b"raw\tbytes";
let raw = r#"a "quoted" word"#;
let nested = r##"ends with "# not yet"##;
