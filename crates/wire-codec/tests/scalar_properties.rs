//! Round-trip properties for the scalar codecs.
//!
//! `decode(encode(v)) == v` for every value in each codec's domain. Epoch
//! seconds truncate sub-second precision, so timestamps are generated on
//! whole seconds.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use proptest::prelude::*;
use serde_json::{json, Value};
use wire_codec::models::ParticipantDevice;
use wire_codec::scalar::{
    Comma, DateOnly, DayOfWeek, Delimited, EpochMillis, EpochSeconds, FlagSet, KeyValueList,
    KeyValuePair, LocalTimestamp, ScalarCodec, Semicolon, TitleValue, TolerantBool, WeekdayList,
};

/// 0001-01-01T00:00:00Z .. 9999-12-31T23:59:59Z
const MIN_SECONDS: i64 = -62_135_596_800;
const MAX_SECONDS: i64 = 253_402_300_799;

fn whole_second_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (MIN_SECONDS..=MAX_SECONDS).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1..=9999i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn weekday() -> impl Strategy<Value = Weekday> {
    (0..7u8).prop_map(|n| Weekday::try_from(n).unwrap())
}

const DEVICES: [ParticipantDevice; 10] = [
    ParticipantDevice::Windows,
    ParticipantDevice::Mac,
    ParticipantDevice::Linux,
    ParticipantDevice::Ios,
    ParticipantDevice::Android,
    ParticipantDevice::Phone,
    ParticipantDevice::H323Sip,
    ParticipantDevice::Web,
    ParticipantDevice::ZoomRooms,
    ParticipantDevice::Unknown,
];

fn round_trips<C>(value: &C::Value) -> bool
where
    C: ScalarCodec,
    C::Value: PartialEq,
{
    C::decode(&C::encode(value)).map_or(false, |decoded| decoded == *value)
}

proptest! {
    #[test]
    fn prop_epoch_seconds_round_trip(ts in whole_second_timestamp()) {
        prop_assert!(round_trips::<EpochSeconds>(&ts));
    }

    #[test]
    fn prop_epoch_millis_round_trip(millis in (MIN_SECONDS * 1000)..=(MAX_SECONDS * 1000)) {
        let ts = DateTime::from_timestamp_millis(millis).unwrap();
        prop_assert!(round_trips::<EpochMillis>(&ts));
    }

    #[test]
    fn prop_date_only_round_trip(d in date()) {
        prop_assert!(round_trips::<DateOnly>(&d));
    }

    #[test]
    fn prop_local_timestamp_round_trip(ts in whole_second_timestamp()) {
        prop_assert!(round_trips::<LocalTimestamp>(&ts));
    }

    #[test]
    fn prop_day_of_week_round_trip(day in weekday()) {
        prop_assert!(round_trips::<DayOfWeek>(&day));
    }

    #[test]
    fn prop_weekday_list_round_trip(days in prop::collection::vec(weekday(), 0..7)) {
        prop_assert!(round_trips::<WeekdayList>(&days));
    }

    #[test]
    fn prop_tolerant_bool_round_trip(b in any::<bool>()) {
        prop_assert!(round_trips::<TolerantBool>(&b));
    }

    #[test]
    fn prop_delimited_round_trip(items in prop::collection::vec("[a-z0-9@.]{1,12}", 0..6)) {
        prop_assert!(round_trips::<Delimited<Semicolon>>(&items));
    }

    #[test]
    fn prop_comma_delimited_round_trip(items in prop::collection::vec("[a-z0-9 ]{1,12}", 0..6)) {
        prop_assert!(round_trips::<Delimited<Comma>>(&items));
    }

    #[test]
    fn prop_flag_set_round_trip(
        devices in prop::collection::vec(prop::sample::select(DEVICES.to_vec()), 0..5)
    ) {
        prop_assert!(round_trips::<FlagSet<ParticipantDevice>>(&devices));
    }

    #[test]
    fn prop_key_value_round_trip(
        pairs in prop::collection::vec(("[A-Za-z0-9 ?]{1,16}", "[A-Za-z0-9 ]{0,16}"), 0..6)
    ) {
        let pairs: Vec<KeyValuePair> = pairs
            .into_iter()
            .map(|(key, value)| KeyValuePair::new(key, value))
            .collect();
        prop_assert!(round_trips::<KeyValueList<TitleValue>>(&pairs));
    }

    #[test]
    fn prop_epoch_seconds_truncates_sub_second(secs in 0..=MAX_SECONDS, nanos in 1..1_000_000_000u32) {
        let ts = DateTime::from_timestamp(secs, nanos).unwrap();
        let decoded = EpochSeconds::decode(&EpochSeconds::encode(&ts)).unwrap();
        prop_assert_eq!(decoded.timestamp(), secs);
        prop_assert_ne!(decoded, ts);
    }
}

#[test]
fn test_empty_flag_set_encodes_empty_string() {
    let encoded = FlagSet::<ParticipantDevice>::encode(&Vec::new());
    assert_eq!(encoded, json!(""));
    assert!(FlagSet::<ParticipantDevice>::decode(&encoded).unwrap().is_empty());
    assert!(FlagSet::<ParticipantDevice>::decode(&Value::Null)
        .unwrap()
        .is_empty());
}
