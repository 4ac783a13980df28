fn main() {
    let mut buf = [0u8; dragonbox::BINARY64_BUFFER_SIZE];

    for x in [1.0, 1.0 / 3.0, 123.456e7, -0.0, f64::INFINITY, f64::NAN] {
        println!("{x} -> {}", dragonbox::f64_to_chars(x, &mut buf));
    }

    let mut buf = [0u8; dragonbox::BINARY32_BUFFER_SIZE];
    let largest_f32 = f32::from_bits(0x7f7f_ffff);
    println!(
        "{largest_f32} -> {}",
        dragonbox::f32_to_chars(largest_f32, &mut buf)
    );
}
