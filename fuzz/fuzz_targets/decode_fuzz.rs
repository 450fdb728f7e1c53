#![no_main]
use ctpkcs1::ct::probe;
use ctpkcs1::pkcs1;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the sentinel length; the rest is the encoded message.
    let sentinel_len = data[0] as usize;
    let em = &data[1..];
    let sentinel = vec![0xA5u8; sentinel_len];

    // The decoder must never panic. Usage errors are fine.
    let (result, visits) = probe::count(|| pkcs1::decode(em, &sentinel));
    let Ok(decoded) = result else {
        return;
    };

    // Visits depend on the message length only.
    let word = size_of::<usize>();
    assert_eq!(visits, 10 + (em.len() - 10 + 1) + em.len() + word);
    assert_eq!(decoded.output().len(), em.len());

    let valid = em[0] == 0
        && em[1] == 2
        && em[2..10].iter().all(|&b| b != 0)
        && em[10..].contains(&0);
    if valid {
        let sep = 10 + em[10..].iter().position(|&b| b == 0).unwrap();
        assert_eq!(decoded.message(), &em[sep + 1..]);
    } else {
        assert_eq!(decoded.message(), &sentinel[..]);
    }
});
