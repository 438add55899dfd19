//! Fixed test values for deterministic tests
//!
//! Digests derived from these values are pinned in tests, so changing any of
//! them breaks those tests.

// Shared secret (endpoint secret token)
pub const TEST_SECRET_TOKEN: &str = "test-webhook-secret-do-not-use";

// Validation challenge
pub const TEST_PLAIN_TOKEN: &str = "qgg8vlvZRS6UYooatFL8Aw";
pub const TEST_ENCRYPTED_TOKEN: &str =
    "db39f022d0d1c89f776703f2103d9e5c7ec77fa15c0737127dfe8c57f7d77d1e";

// Signed delivery
pub const TEST_SIGNED_TIMESTAMP: &str = "1700000000";
pub const TEST_SIGNED_BODY: &str = r#"{"event":"meeting.started"}"#;
pub const TEST_SIGNATURE: &str =
    "v0=42eec9ecf7db4949c817e354f7bf4c19119951edd37add296e903b6dc19b9044";

// Envelope timestamps
pub const TEST_EVENT_TS: i64 = 1_700_000_000;
pub const TEST_EVENT_TS_MILLIS: i64 = 1_700_000_000_123;

// Account and user IDs
pub const TEST_ACCOUNT_ID: &str = "acc-test-0001";
pub const TEST_HOST_ID: &str = "host-test-0001";
pub const TEST_HOST_EMAIL: &str = "host@example.com";
pub const TEST_USER_ID: &str = "user-test-0001";
pub const TEST_OPERATOR: &str = "admin@example.com";

// Meeting IDs
pub const TEST_MEETING_ID: i64 = 85_746_065_432;
pub const TEST_MEETING_UUID: &str = "4444AAAiAAAAAiAiAiiAii==";
pub const TEST_WEBINAR_ID: i64 = 95_746_065_432;
