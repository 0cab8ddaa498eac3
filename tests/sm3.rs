use smcrypto::hash::{Sm3, sm3};

fn hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{:02X}", b)).collect()
}

#[test]
fn sm3_abc_vector() {
    assert_eq!(
        hex(&sm3(b"abc")),
        "66C7F0F462EEEDD9D1F2D46BDC10E4E24167C4875CF2F7A2297DA02B8F4BA8E0"
    );
}

#[test]
fn sm3_empty_vector() {
    assert_eq!(
        hex(&sm3(b"")),
        "1AB21D8355CFA17F8E61194831E81A8F22BEC8C728FEFB747ED035EB5082AA2B"
    );
}

#[test]
fn sm3_one_full_block() {
    // exactly one 64-byte block forces the length into a second block
    assert_eq!(
        hex(&sm3(&[b'a'; 64])),
        "616EC433C359E7C2B19F360E2B8F2A1B6E9ED76B8DC1A7D207B31A5341C611E9"
    );
}

#[test]
fn sm3_padding_boundary() {
    // 56 bytes leaves no room for the length in the same block
    assert_eq!(
        hex(&sm3(&[b'a'; 56])),
        "BA00EBEDAAB54065A5FD4F9F56326016203166BCEE3EED44EA868D59D67AA3C8"
    );
}

#[test]
fn streaming_matches_one_shot() {
    let mut ctx = Sm3::new();
    ctx.update(b"ab");
    ctx.update_byte(b'c');

    assert_eq!(ctx.finish(), sm3(b"abc"));
}

#[test]
fn context_resets_after_finish() {
    let mut ctx = Sm3::new();

    ctx.update(b"abc");
    let first = ctx.finish();

    ctx.update(b"abc");
    let second = ctx.finish();

    assert_eq!(first, second, "a finished context must be reusable");
}

#[test]
fn digest_fields_hold_last_result() {
    let mut ctx = Sm3::new();
    ctx.update(b"abc");
    ctx.finish();

    assert_eq!(
        ctx.digest_hex(),
        "66C7F0F462EEEDD9D1F2D46BDC10E4E24167C4875CF2F7A2297DA02B8F4BA8E0"
    );
    assert_eq!(ctx.digest(), sm3(b"abc"));
    assert_eq!(ctx.digest_hex().len(), 64);
}

#[test]
fn large_multi_block_input() {
    let data = vec![0x5Au8; 1000];

    let mut ctx = Sm3::new();
    ctx.update(&data);

    assert_eq!(ctx.finish(), sm3(&data));
}
