use mirage_core::{FeedConfig, MediaItem, MediaType, OrderToken, parse_offset};
use strum::IntoEnumIterator;

#[test]
fn file_type_inference() {
    assert_eq!(MediaType::from_key("a/b/c.mp4"), MediaType::Video);
    assert_eq!(MediaType::from_key("x.JPG"), MediaType::Image);
    assert_eq!(MediaType::from_key("noext"), MediaType::Image);
    assert_eq!(MediaType::from_key("trip/day1.M4V"), MediaType::Video);
    assert_eq!(MediaType::from_key("weird.mp4.png"), MediaType::Image);
    assert_eq!(MediaType::from_key("archive.tar.webm"), MediaType::Video);
}

#[test]
fn media_type_round_trips_through_str() {
    for media_type in MediaType::iter() {
        let parsed: MediaType = media_type.as_str().parse().expect("parse media type");
        assert_eq!(parsed, media_type);
        assert_eq!(media_type.to_string(), media_type.as_str());
    }
    assert!("audio".parse::<MediaType>().is_err());
}

#[test]
fn media_item_serializes_type_field() {
    let item = MediaItem::from_key("reel/clip.webm");
    assert!(item.is_video());
    let json = serde_json::to_string(&item).expect("serialize item");
    assert_eq!(json, r#"{"key":"reel/clip.webm","type":"video"}"#);

    let back: MediaItem = serde_json::from_str(&json).expect("deserialize item");
    assert_eq!(back, item);
}

#[test]
fn order_token_parsing() {
    assert_eq!("4294967295".parse::<OrderToken>(), Ok(OrderToken::new(u32::MAX)));
    assert!("4294967296".parse::<OrderToken>().is_err());
    assert!("-1".parse::<OrderToken>().is_err());
    assert!("".parse::<OrderToken>().is_err());
}

#[test]
fn order_token_accepts_only_canonical_decimal() {
    assert_eq!("0".parse::<OrderToken>(), Ok(OrderToken::new(0)));
    for raw in ["042", "00", " 7", "7 ", "+42", "4_2"] {
        assert!(raw.parse::<OrderToken>().is_err(), "{raw:?} should be rejected");
    }
    for raw in ["0", "7", "42", "4294967295"] {
        let token: OrderToken = raw.parse().expect("canonical token");
        assert_eq!(token.to_string(), raw);
    }
}

#[test]
fn order_token_resolve_keeps_valid_tokens() {
    assert_eq!(OrderToken::resolve(Some("31337")), OrderToken::new(31337));
}

#[test]
fn order_token_resolve_reseeds_malformed_tokens() {
    let tokens: std::collections::HashSet<_> = (0..8)
        .map(|_| OrderToken::resolve(Some("not-a-number")))
        .collect();
    assert!(tokens.len() > 1);
}

#[test]
fn order_token_is_a_json_string() {
    let json = serde_json::to_string(&OrderToken::new(42)).expect("serialize token");
    assert_eq!(json, r#""42""#);
    let back: OrderToken = serde_json::from_str(&json).expect("deserialize token");
    assert_eq!(back.seed(), 42);
    assert!(serde_json::from_str::<OrderToken>(r#""x""#).is_err());
}

#[test]
fn offsets_are_clamped() {
    assert_eq!(parse_offset(Some("  24")), 24);
    assert_eq!(parse_offset(Some("+3")), 3);
    assert_eq!(parse_offset(Some("")), 0);
    assert_eq!(parse_offset(Some("99999999999999999999999999")), usize::MAX);
}

#[test]
fn feed_config_validation() {
    assert!(FeedConfig::default().with_page_size(0).validate().is_err());
    let config = mirage_core::FeedConfigBuilder::default()
        .page_size(10)
        .build()
        .expect("build feed config");
    assert_eq!(*config.page_size(), 10);
    assert_eq!(*config.key_cache_ttl_secs(), 60);
}
