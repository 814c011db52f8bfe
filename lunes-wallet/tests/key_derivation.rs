//! Tests for key derivation and addresses

use lunes_wallet::account::address::{self, encode, validate, validate_with_versions};
use lunes_wallet::crypto::keys::*;
use lunes_wallet::{Account, ChainId};

const PHRASE: &str = "scrub guard swim catch range upon dawn ensure segment alpha sentence spend effort bar benefit";

#[test]
fn test_seed_golden_vectors() {
    assert_eq!(
        hex::encode(*derive_seed(0, PHRASE)),
        "a34211e1159080cbf115cdd1108adb9b323018d1e34f2368fc66d54a3fa51460"
    );
    assert_eq!(
        hex::encode(*derive_seed(1, PHRASE)),
        "9ec39e2bebaf5171478e8675e2f78cbd0956c1363b28643bd5ab087197f42b74"
    );
}

#[test]
fn test_key_pair_golden_vectors() {
    let key_pair = derive_key_pair(0, PHRASE);
    assert_eq!(
        key_pair.private_key().to_base58().as_str(),
        "BnafXBSq1VDUdZ1nSjJoxhnQdBv2hk3o6dbV49TD1bzo"
    );
    assert_eq!(key_pair.public_key().to_base58(), "2uuQVr3B5aGgvSJ5BMCw4Cd19tdYdnMGoYnji99aPde4");

    let key_pair = derive_key_pair(1, PHRASE);
    assert_eq!(key_pair.public_key().to_base58(), "AMXrxLv1wtnr8EWxvk1hcuujTzh56SiuPGBQqho2ocW2");
}

#[test]
fn test_key_derivation_steps_compose() {
    let seed = derive_seed(0, PHRASE);
    let private_key = derive_private_key(&seed);
    let public_key = derive_public_key(&private_key);
    let key_pair = derive_key_pair(0, PHRASE);

    assert_eq!(&private_key, key_pair.private_key());
    assert_eq!(&public_key, key_pair.public_key());
}

#[test]
fn test_account_golden_addresses() {
    let mainnet = Account::from_seed(PHRASE, 0, ChainId::MAINNET);
    let testnet = Account::from_seed(PHRASE, 0, ChainId::TESTNET);

    assert_eq!(mainnet.address().to_base58(), "37o7aY3eZZTXmzrDa5e4Wj3Z4ZZuyV42Aaj");
    assert_eq!(testnet.address().to_base58(), "37PmyYwMGrH4uBR5V4DjCEvHGw4f2pdXW5u");
    assert_eq!(
        Account::from_seed(PHRASE, 1, ChainId::MAINNET).address().to_base58(),
        "37tD32367v1fiWgW8waw3QTdYTKKGrCV3zw"
    );
}

#[test]
fn test_address_with_custom_version() {
    let public_key = PublicKey::from_base58("2uuQVr3B5aGgvSJ5BMCw4Cd19tdYdnMGoYnji99aPde4").unwrap();
    let address = encode(public_key.as_bytes(), ChainId::MAINNET, 0x35);

    assert_eq!(address.to_base58(), "2dUGP9wZZoAz5LnnEmtW37z8snxhf5QhBy1n");
    assert_eq!(address.version(), Some(0x35));
    assert!(validate_with_versions(ChainId::MAINNET, &address.to_base58(), &[0x35]));
}

#[test]
fn test_validate_known_addresses() {
    assert!(validate(ChainId::MAINNET, "37o7aY3eZZTXmzrDa5e4Wj3Z4ZZuyV42Aaj"));
    assert!(validate(ChainId::TESTNET, "37PmyYwMGrH4uBR5V4DjCEvHGw4f2pdXW5u"));

    assert!(!validate(ChainId::TESTNET, "37o7aY3eZZTXmzrDa5e4Wj3Z4ZZuyV42Aaj"));
    assert!(!validate(ChainId::MAINNET, "37o7aY3eZZTXmzrDa5e4Wj3Z4ZZuyV42Aak"));
    assert!(!validate(ChainId::MAINNET, "37o7aY3eZZTXmzrDa5e4Wj3Z4ZZuyV42Aa0"));
    assert_eq!(address::ADDRESS_LENGTH, 26);
}
