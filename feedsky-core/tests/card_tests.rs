use feedsky_core::bluesky::{ExternalCard, PostRecord};
use feedsky_core::publish::{truncate_title, MAX_TITLE_LEN};
use feedsky_core::scrape::extract_og_image;
use feedsky_core::thumb::{encode_png, resize_to_card, scaled_height, CARD_WIDTH};
use image::GenericImageView;

#[test]
fn short_titles_pass_through_unchanged() {
    assert_eq!(truncate_title("CloudFront update"), "CloudFront update");
}

#[test]
fn titles_at_the_limit_pass_through_unchanged() {
    let title = "x".repeat(MAX_TITLE_LEN);
    assert_eq!(truncate_title(&title), title);
}

#[test]
fn long_titles_are_cut_to_the_limit_with_ellipsis() {
    let title = "x".repeat(400);
    let truncated = truncate_title(&title);
    assert_eq!(truncated.chars().count(), MAX_TITLE_LEN);
    assert!(truncated.ends_with("..."));
}

#[test]
fn truncation_respects_char_boundaries() {
    let title = "é".repeat(400);
    let truncated = truncate_title(&title);
    assert_eq!(truncated.chars().count(), MAX_TITLE_LEN);
    assert!(truncated.ends_with("..."));
}

#[test]
fn og_image_is_extracted_from_page_head() {
    let html = r#"<html><head>
        <meta property="og:title" content="A post" />
        <meta property="og:image" content="https://example.com/cover.png" />
    </head><body>text</body></html>"#;

    assert_eq!(
        extract_og_image(html).as_deref(),
        Some("https://example.com/cover.png")
    );
}

#[test]
fn missing_og_image_yields_none() {
    let html = "<html><head><title>bare</title></head><body>text</body></html>";
    assert_eq!(extract_og_image(html), None);
}

#[test]
fn scaled_height_preserves_aspect_ratio() {
    assert_eq!(scaled_height(600, 400), 200);
    assert_eq!(scaled_height(640, 480), 225);
    assert_eq!(scaled_height(300, 123), 123);
    // rounds, not truncates
    assert_eq!(scaled_height(1000, 501), 150);
    assert_eq!(scaled_height(1000, 505), 152);
}

#[test]
fn resize_produces_a_card_width_png() {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        600,
        400,
        image::Rgb([12, 34, 56]),
    ));
    let resized = resize_to_card(&img);
    assert_eq!(resized.dimensions(), (CARD_WIDTH, 200));

    let png = encode_png(&resized).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.dimensions(), (CARD_WIDTH, 200));
}

#[test]
fn post_record_matches_the_lexicon_wire_shape() {
    let record = PostRecord::card(
        "2026-08-08T12:00:00.000000Z",
        "en-US",
        ExternalCard {
            uri: "https://example.com/a".to_owned(),
            title: "A post".to_owned(),
            description: "About a post".to_owned(),
            thumb: serde_json::json!({"$type": "blob", "ref": {"$link": "bafkrei-x"}}),
        },
    );

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["$type"], "app.bsky.feed.post");
    assert_eq!(value["text"], "");
    assert_eq!(value["createdAt"], "2026-08-08T12:00:00.000000Z");
    assert_eq!(value["langs"], serde_json::json!(["en-US"]));
    assert_eq!(value["embed"]["$type"], "app.bsky.embed.external");
    assert_eq!(value["embed"]["external"]["uri"], "https://example.com/a");
    assert_eq!(value["embed"]["external"]["thumb"]["$type"], "blob");
}
