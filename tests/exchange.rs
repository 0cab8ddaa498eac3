use smcrypto::primitives::BigInt256;
use smcrypto::sm2::{
    EcPoint, FpElement, Sm2Error, initiator_step, public_from_private, responder_confirm,
    responder_step,
};

const ID_A: &str = "ALICE123@YAHOO.COM";
const ID_B: &str = "BILL456@YAHOO.COM";

const D_A: &str = "6FCBA2EF9AE0AB902BC3BDE3FF915D44BA4CC78F88E2F8E7F8996D3B8CCEEDEE";
const R_A: &str = "83A2C9C8B96E5AF70BD480B472409A9A327257F1EBB73F5B073354B248668563";
const D_B: &str = "5E35D7D3F3C54DBAC72E61819E730B019A84208CA3A35E4C2E353DFCCB2A3B53";
const R_B: &str = "33FE21940342161C55619C4A0C060293D543C80AF19748CE176D83477DE71C80";

fn unhex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

struct Party {
    d: BigInt256,
    p: EcPoint,
    r: BigInt256,
    r_point: EcPoint,
}

fn party(d_hex: &str, r_hex: &str) -> Party {
    let d = BigInt256::from_hex(d_hex);
    let r = BigInt256::from_hex(r_hex);

    Party {
        d,
        p: public_from_private(&d),
        r,
        r_point: public_from_private(&r),
    }
}

#[test]
fn two_pass_exchange_agrees_on_the_key() {
    let alice = party(D_A, R_A);
    let bill = party(D_B, R_B);

    let b_side = responder_step(
        16,
        &alice.p,
        &alice.r_point,
        &bill.p,
        &bill.d,
        &bill.r_point,
        &bill.r,
        ID_A,
        ID_B,
    )
    .expect("responder step must succeed");

    assert_eq!(b_side.k_b.len(), 32);
    assert_eq!(b_side.k_b, "f02f9068ad13e14f2b2602e0dfb2504f");

    let a_side = initiator_step(
        16,
        &bill.p,
        &bill.r_point,
        &alice.p,
        &alice.d,
        &alice.r_point,
        &alice.r,
        ID_A,
        ID_B,
        &unhex(&b_side.s_b),
    )
    .expect("initiator step must succeed");

    assert_eq!(a_side.k_a, b_side.k_b, "both sides must derive the same key");

    let confirmed = responder_confirm(
        &b_side.v,
        &b_side.z_a,
        &b_side.z_b,
        &alice.r_point,
        &bill.r_point,
        &unhex(&a_side.s_a),
    );
    assert!(confirmed, "B must accept A's confirmation value");
}

#[test]
fn responder_rejects_off_curve_ephemeral() {
    let alice = party(D_A, R_A);
    let bill = party(D_B, R_B);

    let bogus = EcPoint::new(FpElement::from_hex("1"), FpElement::from_hex("1"));

    let result = responder_step(
        16,
        &alice.p,
        &bogus,
        &bill.p,
        &bill.d,
        &bill.r_point,
        &bill.r,
        ID_A,
        ID_B,
    );

    assert_eq!(result.err(), Some(Sm2Error::RaNotOnCurve));
}

#[test]
fn initiator_rejects_off_curve_ephemeral() {
    let alice = party(D_A, R_A);
    let bill = party(D_B, R_B);

    let bogus = EcPoint::new(FpElement::from_hex("1"), FpElement::from_hex("1"));

    let result = initiator_step(
        16,
        &bill.p,
        &bogus,
        &alice.p,
        &alice.d,
        &alice.r_point,
        &alice.r,
        ID_A,
        ID_B,
        &[0u8; 32],
    );

    assert_eq!(result.err(), Some(Sm2Error::RbNotOnCurve));
}

#[test]
fn initiator_rejects_tampered_confirmation() {
    let alice = party(D_A, R_A);
    let bill = party(D_B, R_B);

    let b_side = responder_step(
        16,
        &alice.p,
        &alice.r_point,
        &bill.p,
        &bill.d,
        &bill.r_point,
        &bill.r,
        ID_A,
        ID_B,
    )
    .unwrap();

    let mut s_b = unhex(&b_side.s_b);
    s_b[0] ^= 0x01;

    let result = initiator_step(
        16,
        &bill.p,
        &bill.r_point,
        &alice.p,
        &alice.d,
        &alice.r_point,
        &alice.r,
        ID_A,
        ID_B,
        &s_b,
    );

    assert_eq!(result.err(), Some(Sm2Error::ConfirmationMismatch));
}

#[test]
fn responder_rejects_tampered_confirmation() {
    let alice = party(D_A, R_A);
    let bill = party(D_B, R_B);

    let b_side = responder_step(
        16,
        &alice.p,
        &alice.r_point,
        &bill.p,
        &bill.d,
        &bill.r_point,
        &bill.r,
        ID_A,
        ID_B,
    )
    .unwrap();

    let a_side = initiator_step(
        16,
        &bill.p,
        &bill.r_point,
        &alice.p,
        &alice.d,
        &alice.r_point,
        &alice.r,
        ID_A,
        ID_B,
        &unhex(&b_side.s_b),
    )
    .unwrap();

    let mut s_a = unhex(&a_side.s_a);
    s_a[31] ^= 0x80;

    assert!(!responder_confirm(
        &b_side.v,
        &b_side.z_a,
        &b_side.z_b,
        &alice.r_point,
        &bill.r_point,
        &s_a,
    ));
}

#[test]
fn longer_session_keys_derive_consistently() {
    let alice = party(D_A, R_A);
    let bill = party(D_B, R_B);

    // 48 bytes spans multiple KDF blocks
    let b_side = responder_step(
        48,
        &alice.p,
        &alice.r_point,
        &bill.p,
        &bill.d,
        &bill.r_point,
        &bill.r,
        ID_A,
        ID_B,
    )
    .unwrap();

    let a_side = initiator_step(
        48,
        &bill.p,
        &bill.r_point,
        &alice.p,
        &alice.d,
        &alice.r_point,
        &alice.r,
        ID_A,
        ID_B,
        &unhex(&b_side.s_b),
    )
    .unwrap();

    assert_eq!(a_side.k_a.len(), 96);
    assert_eq!(a_side.k_a, b_side.k_b);
}
