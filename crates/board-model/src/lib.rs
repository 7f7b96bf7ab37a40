use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which board tab is active. Controls both item eligibility and grid sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Emoji,
    Sticker,
}

impl Tab {
    pub fn usage(self) -> PackUsage {
        match self {
            Tab::Emoji => PackUsage::Emoticon,
            Tab::Sticker => PackUsage::Sticker,
        }
    }
}

/// How an image pack (or a single pack image) is meant to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackUsage {
    Emoticon,
    Sticker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageUsage {
    Emoticon,
    Sticker,
    Both,
}

impl ImageUsage {
    pub fn allows(self, usage: PackUsage) -> bool {
        match self {
            ImageUsage::Both => true,
            ImageUsage::Emoticon => usage == PackUsage::Emoticon,
            ImageUsage::Sticker => usage == PackUsage::Sticker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiData {
    pub unicode: String,
    pub shortcode: String,
    pub label: String,
}

impl EmojiData {
    pub fn new(
        unicode: impl Into<String>,
        shortcode: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self { unicode: unicode.into(), shortcode: shortcode.into(), label: label.into() }
    }
}

/// A single image in a custom pack. `body` is the human-readable caption and
/// may be absent; callers fall back to the shortcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackImage {
    pub shortcode: String,
    pub body: Option<String>,
    pub url: String,
    pub usage: ImageUsage,
}

impl PackImage {
    pub fn new(shortcode: impl Into<String>, url: impl Into<String>, usage: ImageUsage) -> Self {
        Self { shortcode: shortcode.into(), body: None, url: url.into(), usage }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Caption for display, falling back to the shortcode.
    pub fn display_body(&self) -> &str {
        self.body.as_deref().unwrap_or(&self.shortcode)
    }
}

/// A custom emoji/sticker pack, identified by the room or user it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePack {
    pub id: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub images: Vec<PackImage>,
}

impl ImagePack {
    pub fn new(id: impl Into<String>, images: Vec<PackImage>) -> Self {
        Self { id: id.into(), display_name: None, avatar_url: None, images }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Pack label for display. A pack without a usable display name degrades
    /// to a fallback label rather than aborting rendering.
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown Pack",
        }
    }

    pub fn images_for(&self, usage: PackUsage) -> impl Iterator<Item = &PackImage> {
        self.images.iter().filter(move |image| image.usage.allows(usage))
    }

    pub fn emoticons(&self) -> impl Iterator<Item = &PackImage> {
        self.images_for(PackUsage::Emoticon)
    }

    pub fn stickers(&self) -> impl Iterator<Item = &PackImage> {
        self.images_for(PackUsage::Sticker)
    }

    pub fn has_content_for(&self, usage: PackUsage) -> bool {
        self.images_for(usage).next().is_some()
    }
}

/// The built-in Unicode emoji categories, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeGroupId {
    People,
    Nature,
    Foods,
    Activity,
    Places,
    Objects,
    Symbols,
    Flags,
}

impl NativeGroupId {
    /// Catalog order. Native groups always render in this sequence.
    pub const ALL: [NativeGroupId; 8] = [
        NativeGroupId::People,
        NativeGroupId::Nature,
        NativeGroupId::Foods,
        NativeGroupId::Activity,
        NativeGroupId::Places,
        NativeGroupId::Objects,
        NativeGroupId::Symbols,
        NativeGroupId::Flags,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NativeGroupId::People => "people",
            NativeGroupId::Nature => "nature",
            NativeGroupId::Foods => "foods",
            NativeGroupId::Activity => "activity",
            NativeGroupId::Places => "places",
            NativeGroupId::Objects => "objects",
            NativeGroupId::Symbols => "symbols",
            NativeGroupId::Flags => "flags",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            NativeGroupId::People => "Smileys & People",
            NativeGroupId::Nature => "Animals & Nature",
            NativeGroupId::Foods => "Food & Drink",
            NativeGroupId::Activity => "Activity",
            NativeGroupId::Places => "Travel & Places",
            NativeGroupId::Objects => "Objects",
            NativeGroupId::Symbols => "Symbols",
            NativeGroupId::Flags => "Flags",
        }
    }
}

impl fmt::Display for NativeGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown native emoji group id `{0}`")]
pub struct UnknownGroupId(pub String);

impl FromStr for NativeGroupId {
    type Err = UnknownGroupId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NativeGroupId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownGroupId(s.to_owned()))
    }
}

/// One built-in emoji category together with its emoji, as supplied by the
/// emoji catalog collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeGroup {
    pub id: NativeGroupId,
    pub label: String,
    pub emojis: Vec<EmojiData>,
}

impl NativeGroup {
    pub fn new(id: NativeGroupId, emojis: Vec<EmojiData>) -> Self {
        Self { id, label: id.default_label().to_owned(), emojis }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_with(images: Vec<PackImage>) -> ImagePack {
        ImagePack::new("!room:example.org", images)
    }

    #[test]
    fn tab_maps_to_pack_usage() {
        assert_eq!(Tab::Emoji.usage(), PackUsage::Emoticon);
        assert_eq!(Tab::Sticker.usage(), PackUsage::Sticker);
    }

    #[test]
    fn display_label_falls_back_for_missing_or_empty_name() {
        let unnamed = pack_with(Vec::new());
        assert_eq!(unnamed.display_label(), "Unknown Pack");

        let empty = pack_with(Vec::new()).with_display_name("");
        assert_eq!(empty.display_label(), "Unknown Pack");

        let named = pack_with(Vec::new()).with_display_name("Cat Pack");
        assert_eq!(named.display_label(), "Cat Pack");
    }

    #[test]
    fn image_usage_filters_pack_content() {
        let pack = pack_with(vec![
            PackImage::new("wave", "mxc://a/1", ImageUsage::Emoticon),
            PackImage::new("party", "mxc://a/2", ImageUsage::Both),
            PackImage::new("big_cat", "mxc://a/3", ImageUsage::Sticker),
        ]);

        let emoticons: Vec<_> = pack.emoticons().map(|i| i.shortcode.as_str()).collect();
        assert_eq!(emoticons, ["wave", "party"]);

        let stickers: Vec<_> = pack.stickers().map(|i| i.shortcode.as_str()).collect();
        assert_eq!(stickers, ["party", "big_cat"]);

        assert!(pack.has_content_for(PackUsage::Emoticon));
        assert!(pack.has_content_for(PackUsage::Sticker));
        assert!(!pack_with(Vec::new()).has_content_for(PackUsage::Sticker));
    }

    #[test]
    fn display_body_prefers_caption_over_shortcode() {
        let plain = PackImage::new("wave", "mxc://a/1", ImageUsage::Both);
        assert_eq!(plain.display_body(), "wave");

        let captioned = plain.with_body("Waving Hand");
        assert_eq!(captioned.display_body(), "Waving Hand");
    }

    #[test]
    fn native_group_ids_round_trip_through_strings() {
        for id in NativeGroupId::ALL {
            assert_eq!(id.as_str().parse::<NativeGroupId>(), Ok(id));
        }

        let err = "weather".parse::<NativeGroupId>().unwrap_err();
        assert_eq!(err, UnknownGroupId("weather".to_owned()));
    }

    #[test]
    fn model_types_serialize_round_trip() {
        let group = NativeGroup::new(
            NativeGroupId::Nature,
            vec![EmojiData::new("\u{1f436}", "dog", "Dog Face")],
        );

        let json = serde_json::to_string(&group).unwrap();
        let back: NativeGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
    }
}
