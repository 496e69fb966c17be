//! Real FFT Example

use fix_fft::{fft_radix2_real_q15, fill_test_signal, Direction};

fn main() {
    let mut samples = [0i16; 16];
    fill_test_signal(&mut samples, 2, 16000).unwrap();

    println!("input data: {:?}", samples);
    fft_radix2_real_q15(&mut samples, Direction::Forward).unwrap();
    println!("packed spectrum: {:?}", samples);

    let scale = fft_radix2_real_q15(&mut samples, Direction::Inverse).unwrap();
    println!("restored (shift left by {}): {:?}", scale, samples);
}
