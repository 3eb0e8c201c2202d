//! UIA2 (f9) conformance tests

use integration_tests::test_fixtures::UIA2_TEST_SETS;
use integration_tests::{hex_bytes, hex_key, init_test_logging};
use snow3g_crypto::nia::nia1_compute_mac_bits;
use snow3g_crypto::{Direction, Uia2};

#[test]
fn test_uia2_mac_test_sets() {
    init_test_logging();

    for set in UIA2_TEST_SETS {
        let uia2 = Uia2::new(&hex_key(set.ik), set.count, set.fresh, set.direction);
        let mac = uia2.f9(&hex_bytes(set.message), set.bit_length).unwrap();
        assert_eq!(mac.to_vec(), hex_bytes(set.mac), "{}", set.name);
    }
}

#[test]
fn test_uia2_verify_test_sets() {
    init_test_logging();

    for set in UIA2_TEST_SETS {
        let message = hex_bytes(set.message);
        let mut mac = hex_bytes(set.mac);
        let uia2 = Uia2::new(&hex_key(set.ik), set.count, set.fresh, set.direction);

        assert!(uia2.verify(&message, set.bit_length, &mac).unwrap(), "{}", set.name);

        mac[3] ^= 0x01;
        assert!(!uia2.verify(&message, set.bit_length, &mac).unwrap(), "{}", set.name);
    }
}

#[test]
fn test_nia1_matches_eia1_test_set() {
    let set = UIA2_TEST_SETS
        .iter()
        .find(|set| set.name == "128-EIA1 Test Set 1")
        .unwrap();

    let mac = nia1_compute_mac_bits(
        set.count,
        0x1F,
        Direction::Uplink,
        &hex_key(set.ik),
        &hex_bytes(set.message),
        set.bit_length,
    )
    .unwrap();
    assert_eq!(mac.to_vec(), hex_bytes(set.mac));
}

#[test]
fn test_uia2_every_prefix_length_is_distinct() {
    let set = &UIA2_TEST_SETS[0];
    let message = hex_bytes(set.message);
    let uia2 = Uia2::new(&hex_key(set.ik), set.count, set.fresh, set.direction);

    let macs: Vec<[u8; 4]> = (0..=192).map(|len| uia2.f9(&message, len).unwrap()).collect();
    for (i, a) in macs.iter().enumerate() {
        for b in &macs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
