#![no_main]
use ctpkcs1::ct;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let choice = data[0];
    let payload = &data[1..];
    let half = payload.len() / 2;
    let (a, b) = (&payload[..half], &payload[half..2 * half]);

    let mut out = vec![0u8; half];
    ct::select(a, b, &mut out, choice);
    assert_eq!(out, if choice == 0 { a } else { b });

    let expected = a.iter().position(|&x| x == choice).unwrap_or(a.len());
    assert_eq!(ct::search(a, choice), expected);

    let eq = vec![0xFFu8; half];
    let none = vec![0u8; half];
    assert_eq!(ct::compare(a, b, &eq, &none) == 0, a == b);
});
