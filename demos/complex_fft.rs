//! Complex FFT Example

use fix_fft::{fft_radix2_q15, Direction};

fn main() {
    let mut re = [1000i16; 8];
    let mut im = [0i16; 8];

    println!("input data: re = {:?}, im = {:?}", re, im);
    fft_radix2_q15(&mut re, &mut im, Direction::Forward).unwrap();
    println!("spectrum:   re = {:?}, im = {:?}", re, im);

    let scale = fft_radix2_q15(&mut re, &mut im, Direction::Inverse).unwrap();
    println!(
        "restored (shift left by {}): re = {:?}, im = {:?}",
        scale, re, im
    );
}
