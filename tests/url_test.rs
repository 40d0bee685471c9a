use chrono::{TimeZone, Utc};

use picdn::position::{position, position_pair, Direction};
use picdn::{color, url, Params, Source, Value};

const SECURE_KEY: &str =
    "ixUd9is/LDGBw6NPfLCGLjO/WraJlHdytC1+xiIFj22mXAWs/6R6ws4gxSXbDcUHMHv0G+oiTgyfMVsRS2b3";
const SECURE_SALT: &str =
    "c9G9eYKCeWen7vkEyV1cnr4MZkfLI/yo6j72JItzKHjMGDNZKqPFzRtup//qiT51HKGJrAha6Gv2huSFLwJr";

fn secure_source() -> Source {
    Source::new("assets").with_secrets(SECURE_KEY, SECURE_SALT)
}

#[test]
fn test_url_with_source_name_without_params() {
    assert_eq!(
        url("assets", "example.jpeg", Params::new()).unwrap(),
        "https://assets.picdn.net/example.jpeg"
    );
}

#[test]
fn test_url_with_source_name_with_params() {
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_watermark_path() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("watermark", "example.svg")
        .with("format", "png");
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&watermark=example.svg&format=png"
    );
}

#[test]
fn test_url_with_watermark_path_with_inline_params() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("watermark", "example.svg?width=100&format=png")
        .with("format", "png");
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&watermark=example.svg%3Fwidth%3D100%26format%3Dpng&format=png"
    );
}

#[test]
fn test_url_with_nested_url_as_watermark() {
    let nested = url("assets", "example.svg", Params::new().with("width", 100).with("format", "png")).unwrap();
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("watermark", nested)
        .with("format", "png");
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&watermark=https%3A%2F%2Fassets.picdn.net%2Fexample.svg%3Fwidth%3D100%26format%3Dpng&format=png"
    );
}

#[test]
fn test_url_with_rgb_color() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("background_color", color::rgb(255, 128, 122));
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&background-color=255%2C128%2C122"
    );
}

#[test]
fn test_url_with_rgba_color() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("background_color", color::rgba(255, 128, 122, 128));
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&background-color=255%2C128%2C122%2C128"
    );
}

#[test]
fn test_url_with_named_color() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("background_color", color::named("blue").unwrap());
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&background-color=blue"
    );
}

#[test]
fn test_url_with_position_pair() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("mode", "crop")
        .with("crop", position_pair(Direction::Left, Direction::Bottom).unwrap());
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&mode=crop&crop=left%2Cbottom"
    );

    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("mode", "crop")
        .with("crop", position_pair(Direction::Bottom, Direction::Left).unwrap());
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&mode=crop&crop=bottom%2Cleft"
    );
}

#[test]
fn test_url_with_single_position() {
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("mode", "crop")
        .with("crop", position(Direction::Left));
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&mode=crop&crop=left"
    );
}

#[test]
fn test_url_with_underscore_keys() {
    let params = Params::new().with("trim", "color").with("trim_color", "orange");
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?trim=color&trim-color=orange"
    );
}

#[test]
fn test_url_with_hyphen_keys() {
    let params = Params::new().with("trim", "color").with("trim-color", "orange");
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?trim=color&trim-color=orange"
    );
}

#[test]
fn test_url_with_expires_timestamp() {
    let expires = Utc.timestamp_opt(1464096368, 0).unwrap();
    let params = Params::new().with("width", 200).with("height", 300).with("expires", expires);
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&expires=1464096368"
    );
}

#[test]
fn test_url_with_empty_value_as_bare_key() {
    let params = Params::new().with("width", 200).with("download", Value::Empty);
    assert_eq!(
        url("assets", "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&download"
    );
}

#[test]
fn test_url_with_source_without_subdomains() {
    let source = Source::new("assets").with_subdomains(false);
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(source, "example.jpeg", params).unwrap(),
        "https://picdn.net/assets/example.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_source_without_https() {
    let source = Source::new("assets").with_https(false);
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(source, "example.jpeg", params).unwrap(),
        "http://assets.picdn.net/example.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_source_with_host() {
    let source = Source::new("assets").with_host("cdn.example.com");
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(source, "example.jpeg", params).unwrap(),
        "https://assets.cdn.example.com/example.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_source_with_port() {
    let source = Source::new("assets").with_port(8080);
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(source, "example.jpeg", params).unwrap(),
        "https://assets.picdn.net:8080/example.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_source_with_all_options() {
    let source = Source::new("assets")
        .with_subdomains(false)
        .with_https(false)
        .with_host("cdn.example.com")
        .with_port(8080);
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(source, "example.jpeg", params).unwrap(),
        "http://cdn.example.com:8080/assets/example.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_slash_wrapped_paths() {
    let params = || Params::new().with("width", 200).with("height", 300).with("format", "png");
    for path in ["/example.jpeg", "example.jpeg/", "/example.jpeg/"] {
        assert_eq!(
            url("assets", path, params()).unwrap(),
            "https://assets.picdn.net/example.jpeg?width=200&height=300&format=png"
        );
    }
    for path in ["/subfolder/example.jpeg", "/subfolder/example.jpeg/"] {
        assert_eq!(
            url("assets", path, params()).unwrap(),
            "https://assets.picdn.net/subfolder/example.jpeg?width=200&height=300&format=png"
        );
    }
}

#[test]
fn test_url_with_paths_using_reserved_characters() {
    let params = || Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url("assets", "/example image%2C01%2C02.jpeg", params()).unwrap(),
        "https://assets.picdn.net/example%20image%252C01%252C02.jpeg?width=200&height=300&format=png"
    );
    assert_eq!(
        url("assets", "/subfolder images/example image%2C01%2C02.jpeg/", params()).unwrap(),
        "https://assets.picdn.net/subfolder%20images/example%20image%252C01%252C02.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_url_with_web_uri_paths() {
    let params = || Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url("assets", "http://assets.com/subfolder/example.jpeg", params()).unwrap(),
        "https://assets.picdn.net/http%3A%2F%2Fassets.com%2Fsubfolder%2Fexample.jpeg?width=200&height=300&format=png"
    );
    assert_eq!(
        url("assets", "https://assets.com/subfolder/example%2C01%2C02.jpeg", params()).unwrap(),
        "https://assets.picdn.net/https%3A%2F%2Fassets.com%2Fsubfolder%2Fexample%252C01%252C02.jpeg?width=200&height=300&format=png"
    );
}

#[test]
fn test_secure_url_without_params() {
    assert_eq!(
        url(secure_source(), "example.jpeg", Params::new()).unwrap(),
        "https://assets.picdn.net/example.jpeg?signature=aRgmnJ-7b2A0QLxXpR3cqrHVYmCfpRCOglL-nsp7SdQ"
    );
}

#[test]
fn test_secure_url_with_params() {
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(secure_source(), "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&format=png&signature=VJ159IlBl_AlN59QWvyJov5SlQXlrZNpXgDJLJgzP8g"
    );
}

#[test]
fn test_secure_url_with_underscore_keys() {
    let params = Params::new().with("trim", "color").with("trim_color", "orange");
    assert_eq!(
        url(secure_source(), "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?trim=color&trim-color=orange&signature=cfYzBKvaWJhg_4ArtL5IafGYU6FEgRb_5ZADIgvviWw"
    );
}

#[test]
fn test_secure_url_with_expires_timestamp() {
    let expires = Utc.timestamp_opt(1464096368, 0).unwrap();
    let params = Params::new().with("width", 200).with("height", 300).with("expires", expires);
    assert_eq!(
        url(secure_source(), "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&expires=1464096368&signature=DpkRMiecDlOaQAQM5IQ8Cd4ek8nGvfPxV6XmCN0GbAU"
    );
}

#[test]
fn test_secure_url_with_empty_value_as_bare_key() {
    let params = Params::new().with("width", 200).with("download", Value::Empty);
    assert_eq!(
        url(secure_source(), "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&download&signature=wi8zhC5qU8Q8NWiiw1zp1g3B9T_y9A3LHBT8pzP43E0"
    );
}

// Host options never enter the signature payload, only path and query do.
#[test]
fn test_secure_url_signature_is_host_independent() {
    let params = || Params::new().with("width", 200).with("height", 300).with("format", "png");

    let source = secure_source().with_subdomains(false);
    assert_eq!(
        url(source, "example.jpeg", params()).unwrap(),
        "https://picdn.net/assets/example.jpeg?width=200&height=300&format=png&signature=VJ159IlBl_AlN59QWvyJov5SlQXlrZNpXgDJLJgzP8g"
    );

    let source = secure_source().with_https(false).with_port(8080);
    assert_eq!(
        url(source, "example.jpeg", params()).unwrap(),
        "http://assets.picdn.net:8080/example.jpeg?width=200&height=300&format=png&signature=VJ159IlBl_AlN59QWvyJov5SlQXlrZNpXgDJLJgzP8g"
    );

    let source = secure_source().with_host("cdn.example.com");
    assert_eq!(
        url(source, "example.jpeg", params()).unwrap(),
        "https://assets.cdn.example.com/example.jpeg?width=200&height=300&format=png&signature=VJ159IlBl_AlN59QWvyJov5SlQXlrZNpXgDJLJgzP8g"
    );
}

#[test]
fn test_secure_url_with_subfolder_path() {
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(secure_source(), "/subfolder/example.jpeg/", params).unwrap(),
        "https://assets.picdn.net/subfolder/example.jpeg?width=200&height=300&format=png&signature=3jydAIXhF8Nn_LXKhog2flf7FsACzISi_sXCKmASkOs"
    );
}

// The unencoded path is signed, even though the rendered URL carries the
// encoded form.
#[test]
fn test_secure_url_with_web_uri_path() {
    let params = Params::new().with("width", 200).with("height", 300).with("format", "png");
    assert_eq!(
        url(secure_source(), "https://assets.com/subfolder/example.jpeg", params).unwrap(),
        "https://assets.picdn.net/https%3A%2F%2Fassets.com%2Fsubfolder%2Fexample.jpeg?width=200&height=300&format=png&signature=7Dp8Q01u_5YmpmH-j_y4P5vzOn_9EGvh77B3fi2Ke-s"
    );
}

#[test]
fn test_secure_url_with_nested_url_as_watermark() {
    let nested = url("assets", "example.svg", Params::new().with("width", 100).with("format", "png")).unwrap();
    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("watermark", nested)
        .with("format", "png");
    assert_eq!(
        url(secure_source(), "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&watermark=https%3A%2F%2Fassets.picdn.net%2Fexample.svg%3Fwidth%3D100%26format%3Dpng&format=png&signature=Sl01mSDyI2JP-QjQeqiC6Din-Fe8HMG6nPyQHYHbOyw"
    );
}

#[test]
fn test_secure_url_with_nested_signed_url_as_watermark() {
    let source = secure_source();
    let nested = url(&source, "example.svg", Params::new().with("width", 100).with("format", "png")).unwrap();
    assert_eq!(
        nested,
        "https://assets.picdn.net/example.svg?width=100&format=png&signature=iKKUBWG4kZBv6CVxwaWGPpHd9LLTfuj9CBWamNYtWaI"
    );

    let params = Params::new()
        .with("width", 200)
        .with("height", 300)
        .with("watermark", nested)
        .with("format", "png");
    assert_eq!(
        url(&source, "example.jpeg", params).unwrap(),
        "https://assets.picdn.net/example.jpeg?width=200&height=300&watermark=https%3A%2F%2Fassets.picdn.net%2Fexample.svg%3Fwidth%3D100%26format%3Dpng%26signature%3DiKKUBWG4kZBv6CVxwaWGPpHd9LLTfuj9CBWamNYtWaI&format=png&signature=2PGtljjarJvrfGevNANGfRgcw7BHq9EEmOCoIst10EY"
    );
}

#[test]
fn test_url_with_list_param_is_an_error() {
    let params = Params::new().with("width", vec![200, 300]);
    assert!(url("assets", "example.jpeg", params).is_err());

    let params = Params::new().with("quality", 75..=40);
    assert!(url("assets", "example.jpeg", params).is_err());
}

#[test]
fn test_url_with_malformed_secrets_is_an_error() {
    let source = Source::new("assets").with_secrets("not base64!!", "neither!!");
    assert!(url(source, "example.jpeg", Params::new()).is_err());
}
