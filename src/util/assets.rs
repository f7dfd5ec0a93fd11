use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static HERO_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg"))
        .as_str()
}

/// Background artwork behind the landing hero.
pub fn hero_data_uri() -> &'static str {
    HERO_DATA_URI
        .get_or_init(|| load_data_uri("/assets/hero.svg"))
        .as_str()
}

fn load_text(path: &str) -> String {
    let Some(asset) = load_asset(path) else {
        return String::new();
    };
    String::from_utf8(asset.into_owned()).unwrap_or_else(|_| {
        error!("embedded asset {path} is not valid UTF-8");
        String::new()
    })
}

fn load_data_uri(path: &str) -> String {
    let Some(asset) = load_asset(path) else {
        return String::new();
    };
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    format!("data:{mime};base64,{encoded}")
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical).map(|file| file.data);
    if asset.is_none() {
        error!("missing embedded asset: {path}");
    }
    asset
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed.strip_prefix("assets/").unwrap_or(trimmed).to_string()
}

fn guess_mime(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);
        output.push(if chunk.len() > 1 {
            TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char
        } else {
            '='
        });
        output.push(if chunk.len() > 2 {
            TABLE[(b2 & 0b0011_1111) as usize] as char
        } else {
            '='
        });
    }

    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base64_pads_partial_chunks() {
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"<svg/>"), "PHN2Zy8+");
    }

    #[test]
    fn asset_paths_are_canonicalised() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("favicon.svg"), "favicon.svg");
    }

    #[test]
    fn embedded_stylesheet_and_icons_load() {
        assert!(main_css().contains(".gate-panel"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(hero_data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
