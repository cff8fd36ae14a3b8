//! Published MHash-384 test vectors plus cross-checks between the
//! different input paths.

use mhash384::{compute, compute_reader, compute_str, Digest, Error, MHash384, DIGEST_LEN};

fn check(data: &[u8], expected: &str) {
    let digest = compute(data);
    assert_eq!(
        format!("{:X}", digest),
        expected,
        "digest mismatch for {} input bytes",
        data.len()
    );
    assert_eq!(Digest::from_hex(expected).unwrap(), digest);
}

#[test]
fn vector_empty() {
    check(
        b"",
        "4C4B82D07B368E1C22D0DE3759C32D44DA71BE6283E8550A2468DC1FEC38919F7EDB6C1BA08378EC583AE612AB0E02BA",
    );
}

#[test]
fn vector_abc() {
    check(
        b"abc",
        "9171D83EE7DEDE36CAF27C2644897F3114A0F67B6E9193AA1AB23462EA815EDEA535002671E086493B41A528A26FD8B3",
    );
}

#[test]
fn vector_alphabet_56() {
    check(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "290BD2162C2105A0824172A8875EE33BB65A98DC0928100441B41B9399F6A8EA09794834504A3E817D49D29BC20A520A",
    );
}

#[test]
fn vector_alphabet_112() {
    check(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "0B3F13A68AA8D8F0C5B9BF8BE5AECCB73E0D13732C9290006B6DC939ADA79C48AE362E545A067D2C1FB0749C60A49243",
    );
}

#[test]
fn vector_million_a() {
    let data = "aaaaaaaaaa".repeat(100_000);
    check(
        data.as_bytes(),
        "56228E9432471B09A7F696D0DEFA15E664D3E7ACD27E2D39F864C05006F1F77012F4F4CCE7450C52B6C1CFAB84FAEC63",
    );
}

#[test]
fn vector_pangrams() {
    check(
        b"The quick brown fox jumps over the lazy dog",
        "79F76CA53D529162E632152EDE82A403F8F996DEAA009CC512250BAFF910AC24DF1381F7EF1F43DAC26F63EE0CFF3CDF",
    );
    check(
        b"The quick brown fox jumps over the lazy cog",
        "8A2A58B20020F7700FFF629B0D7238D3D5311AC2A9ADA606E69AD7BEBF2B6258AEC74080DEC04AD59F3B9326121DFF66",
    );
    check(
        "Franz jagt im komplett verwahrlosten Taxi quer durch Bayern".as_bytes(),
        "D2E07EA37EF1E0E52BB704DEC3330C3378B943FE242CF3B08B93D18DBD61D4AB7C42E581DBFDBFD2F5D8EDF82C3B35D6",
    );
    check(
        "Frank jagt im komplett verwahrlosten Taxi quer durch Bayern".as_bytes(),
        "E97C790B194532A59BC84090B5C68C5B0D050C6FE937ABDF480CC19C345B72FEF925D83BF9B42D1A8F572ADE7A509FF9",
    );
}

#[test]
fn vector_lorem_ipsum() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipisici elit, sed eiusmod tempor \
                incidunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
                exercitation ullamco laboris nisi ut aliquid ex ea commodi consequat. Quis aute \
                iure reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
                pariatur. Excepteur sint obcaecat cupiditat non proident, sunt in culpa qui \
                officia deserunt mollit anim id est laborum.";
    check(
        text.as_bytes(),
        "A772D7B984ABC790A9FFF51F3BD7C6A53844A233A564A970872C41345AFE19983B8D3CE30B900FD7FDD66CED03D0CD6E",
    );
    // single flipped character
    check(
        text.replace("ullamco", "ullamc0").as_bytes(),
        "614A6B25BD673216EDEAB6A051A8B4869F9AD80CC5DD4AE629DDFB70CAA70E49D51E7027FF35A183A278FE97F8759CF9",
    );
}

#[test]
fn vector_all_byte_values() {
    let data: Vec<u8> = (0u8..=255).collect();
    check(
        &data,
        "BD62440537B975E0CE15648EBFD67AFA92184EFE9717AC0B08F2062FE9B7A9B41E1BFE8517CBDD622342CDDC1458C994",
    );
}

#[test]
fn vector_single_byte() {
    check(
        &[0x42],
        "0D41D5ECE95D1E19D9F2014AD9EE0670555E17700D7296C0582B8BD004861E08720FF65639A9816034CAD49929757867",
    );
}

#[test]
fn vector_hello_world() {
    check(
        b"Hello, world!",
        "EE587DB2282B3E08B2461221B7001B1410417B7371D3AE07F080B8DC4584ED296B96FE1CBEC6E1B38AA7196E23EF735B",
    );
    assert_eq!(
        compute_str("Hello, world!"),
        compute(b"Hello, world!")
    );
}

#[test]
fn streaming_is_chunking_invariant() {
    let data: Vec<u8> = (0..10_007u32).map(|i| (i * 31 % 257) as u8).collect();
    let expected = compute(&data);

    for chunk_size in [1usize, 2, 3, 7, 48, 1024, 8191] {
        let mut state = MHash384::new();
        for chunk in data.chunks(chunk_size) {
            state.update(chunk).unwrap();
        }
        assert_eq!(
            state.digest().unwrap(),
            expected,
            "chunk size {} diverged",
            chunk_size
        );
    }
}

#[test]
fn reader_and_slice_agree() {
    let data = "a".repeat(10_000);
    let expected = "87275957A92910D8A183DFD6705A3AF828EBFB7D847A9D48631FC59911B4B6D5E1A1078AC818EF07072CF3F86E7545F4";
    check(data.as_bytes(), expected);

    let mut cursor = std::io::Cursor::new(data.as_bytes());
    let digest = compute_reader(&mut cursor).unwrap();
    assert_eq!(format!("{:X}", digest), expected);
}

#[test]
fn update_range_selects_window() {
    let data = b"xxThe quick brown fox jumps over the lazy dogxx";
    let mut state = MHash384::new();
    state.update_range(data, 2, data.len() - 4).unwrap();
    assert_eq!(
        state.digest().unwrap(),
        compute(b"The quick brown fox jumps over the lazy dog")
    );
}

#[test]
fn states_are_independent_across_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|n| {
            std::thread::spawn(move || {
                let mut state = MHash384::new();
                for _ in 0..1_000 {
                    state.update(&[n, n.wrapping_add(1)]).unwrap();
                }
                state.digest().unwrap()
            })
        })
        .collect();

    let digests: Vec<Digest> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (n, digest) in digests.iter().enumerate() {
        let n = n as u8;
        let mut expect = MHash384::new();
        for _ in 0..1_000 {
            expect.update(&[n, n.wrapping_add(1)]).unwrap();
        }
        assert_eq!(*digest, expect.digest().unwrap());
    }
}

#[test]
fn digest_is_always_48_bytes() {
    for len in [0usize, 1, 47, 48, 49, 1000] {
        let data = vec![0xA5u8; len];
        assert_eq!(compute(&data).as_bytes().len(), DIGEST_LEN);
    }
}

#[test]
fn reset_restores_initial_behavior() {
    let mut state = MHash384::new();
    state.update(b"garbage").unwrap();
    let _ = state.digest().unwrap();

    state.reset();
    state.update(b"abc").unwrap();
    assert_eq!(state.digest().unwrap(), compute(b"abc"));
}

#[test]
fn finished_state_reports_error() {
    let mut state = MHash384::new();
    let _ = state.digest().unwrap();
    assert!(matches!(state.digest(), Err(Error::Finished)));
    assert!(matches!(state.update_str("x"), Err(Error::Finished)));
    let mut cursor = std::io::Cursor::new(b"data".to_vec());
    assert!(matches!(
        state.update_reader(&mut cursor),
        Err(Error::Finished)
    ));
}
