use std::path::Path;

use mime::Mime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Css,
    JavaScript,
    Json,
    Png,
    Jpeg,
    Gif,
    Svg,
    Icon,
    Webp,
    Text,
    OctetStream,
}

impl ContentType {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase());

        match extension.as_deref() {
            Some("html") | Some("htm") => Self::Html,
            Some("css") => Self::Css,
            Some("js") | Some("mjs") => Self::JavaScript,
            Some("json") => Self::Json,
            Some("png") => Self::Png,
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("gif") => Self::Gif,
            Some("svg") => Self::Svg,
            Some("ico") => Self::Icon,
            Some("webp") => Self::Webp,
            Some("txt") => Self::Text,
            _ => Self::OctetStream,
        }
    }

    pub fn value(&self) -> Mime {
        match *self {
            Self::Html => mime::TEXT_HTML_UTF_8,
            Self::Css => mime::TEXT_CSS_UTF_8,
            Self::JavaScript => mime::APPLICATION_JAVASCRIPT_UTF_8,
            Self::Json => parse_or_octet_stream("application/json; charset=utf-8"),
            Self::Png => mime::IMAGE_PNG,
            Self::Jpeg => mime::IMAGE_JPEG,
            Self::Gif => mime::IMAGE_GIF,
            Self::Svg => mime::IMAGE_SVG,
            Self::Icon => parse_or_octet_stream("image/x-icon"),
            Self::Webp => parse_or_octet_stream("image/webp"),
            Self::Text => mime::TEXT_PLAIN_UTF_8,
            Self::OctetStream => mime::APPLICATION_OCTET_STREAM,
        }
    }
}

fn parse_or_octet_stream(value: &str) -> Mime {
    return value.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM);
}
