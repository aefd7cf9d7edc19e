//! Property tests over arbitrary passwords

use proptest::prelude::*;
use pwhash::{hash, parse, HashConfig, HashGenerator, HashRecord};

fn generator() -> HashGenerator {
    HashGenerator::new(HashConfig::default().with_salt_length(16)).expect("config should be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn created_hash_strings_have_three_fields(password in ".*") {
        let record = parse(&generator().create(&password).unwrap()).unwrap();
        prop_assert!(!record.algorithm.is_empty());
        prop_assert!(!record.salt.is_empty());
        prop_assert!(!record.digest.is_empty());
    }

    #[test]
    fn created_hash_strings_verify(password in ".*") {
        let generator = generator();
        let hash_string = generator.create(&password).unwrap();
        prop_assert!(generator.verify(&password, &hash_string).unwrap());
    }

    #[test]
    fn other_passwords_do_not_verify(password in ".*", other in ".*") {
        prop_assume!(password != other);
        let generator = generator();
        let hash_string = generator.create(&password).unwrap();
        prop_assert!(!generator.verify(&other, &hash_string).unwrap());
    }

    #[test]
    fn hash_strings_round_trip(
        algorithm in "[a-z0-9-]{1,12}",
        salt in "[A-Za-z0-9+/]{0,40}={0,2}",
        digest in "[A-Za-z0-9+/]{0,40}={0,2}",
    ) {
        let record = HashRecord::new(algorithm, salt, digest);
        let encoded = record.encode();
        prop_assert_eq!(parse(&encoded).unwrap().encode(), encoded.clone());
        prop_assert_eq!(parse(&encoded).unwrap(), record);
    }

    #[test]
    fn hash_is_deterministic(password in ".*", salt in "[A-Za-z0-9+/]{8,32}") {
        let a = hash(&password, "sha256", &salt).unwrap();
        let b = hash(&password, "sha256", &salt).unwrap();
        prop_assert_eq!(a, b);
    }
}
