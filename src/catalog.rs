//! Static media catalog for the landing page galleries.
//!
//! Every gallery renders straight from these tables, so reordering a row
//! or swapping a source is a one-line edit here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One card in a gallery. `src` is the deliverable rendered once the
/// card activates; until then the tinted placeholder stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub id: u32,
    pub kind: MediaKind,
    pub src: Option<&'static str>,
    pub label: Option<&'static str>,
    pub sublabel: Option<&'static str>,
    /// Dark accent color for the placeholder gradient.
    pub tint: &'static str,
}

/// Index of the hero card that fetches ahead of its row siblings.
pub const HERO_PRIORITY_INDEX: usize = 2;

pub const HERO_ITEMS: &[MediaItem] = &[
    MediaItem {
        id: 1,
        kind: MediaKind::Video,
        src: Some("/media/hero/cinematic-reel.mp4"),
        label: Some("Cinematic Reel"),
        sublabel: None,
        tint: "#1a1225",
    },
    MediaItem {
        id: 2,
        kind: MediaKind::Image,
        src: Some("/media/hero/editorial-beauty.webp"),
        label: Some("Editorial Beauty"),
        sublabel: None,
        tint: "#1f1a2d",
    },
    MediaItem {
        id: 3,
        kind: MediaKind::Image,
        src: Some("/media/hero/product-hero.webp"),
        label: Some("Product Hero"),
        sublabel: None,
        tint: "#251a1f",
    },
    MediaItem {
        id: 4,
        kind: MediaKind::Video,
        src: Some("/media/hero/ugc-content.mp4"),
        label: Some("UGC Content"),
        sublabel: None,
        tint: "#1a251f",
    },
    MediaItem {
        id: 5,
        kind: MediaKind::Video,
        src: Some("/media/hero/brand-film.mp4"),
        label: Some("Brand Film"),
        sublabel: None,
        tint: "#25201a",
    },
];

pub const WORK_ITEMS: &[MediaItem] = &[
    MediaItem {
        id: 1,
        kind: MediaKind::Video,
        src: Some("/media/work/fashion-editorial.mp4"),
        label: Some("Creative Concept — Fashion Editorial"),
        sublabel: Some("Cinematic brand film with product integration"),
        tint: "#1e1428",
    },
    MediaItem {
        id: 2,
        kind: MediaKind::Video,
        src: Some("/media/work/brand-film-macro.mp4"),
        label: Some("Cinematic Brand Film"),
        sublabel: Some("Macro texture sequence with dramatic lighting"),
        tint: "#1a1020",
    },
    MediaItem {
        id: 3,
        kind: MediaKind::Image,
        src: Some("/media/work/editorial-beauty.webp"),
        label: Some("Editorial Beauty Campaign"),
        sublabel: Some("Full editorial series for skincare launch"),
        tint: "#201418",
    },
    MediaItem {
        id: 4,
        kind: MediaKind::Image,
        src: Some("/media/work/serum-collection.webp"),
        label: Some("Product Hero — Serum Collection"),
        sublabel: Some("Hero shots for e-commerce and retail"),
        tint: "#14201a",
    },
];

pub const UGC_ITEMS: &[MediaItem] = &[
    MediaItem {
        id: 1,
        kind: MediaKind::Video,
        src: Some("/media/ugc/grwm-serum.mp4"),
        label: Some("Get Ready With Me"),
        sublabel: Some("Lumière Skincare — Vitamin C Serum · 15s direct-to-camera testimonial with product B-roll"),
        tint: "#1a1528",
    },
    MediaItem {
        id: 2,
        kind: MediaKind::Video,
        src: Some("/media/ugc/morning-routine.mp4"),
        label: Some("Morning Routine"),
        sublabel: Some("Bare Ritual — Hydrating Cleanser · GRWM routine with product integration and natural lighting"),
        tint: "#151a28",
    },
    MediaItem {
        id: 3,
        kind: MediaKind::Video,
        src: Some("/media/ugc/first-impressions.mp4"),
        label: Some("First Impressions"),
        sublabel: Some("Glow Theory — Retinol Night Cream · Unboxing with texture shots and before-after routine"),
        tint: "#281a15",
    },
    MediaItem {
        id: 4,
        kind: MediaKind::Video,
        src: Some("/media/ugc/product-application.mp4"),
        label: Some("Product Application"),
        sublabel: Some("Velvet Skin Co — Hyaluronic Serum · Close-up application with skin texture detail shots"),
        tint: "#1f1528",
    },
    MediaItem {
        id: 5,
        kind: MediaKind::Video,
        src: Some("/media/ugc/night-routine.mp4"),
        label: Some("Night Routine"),
        sublabel: Some("Dew Drop Beauty — Overnight Mask · Full evening skincare routine with ambient lighting"),
        tint: "#15281a",
    },
];

pub const EDITORIAL_ITEMS: &[MediaItem] = &[
    MediaItem { id: 1, kind: MediaKind::Image, src: Some("/media/editorial/still-01.webp"), label: None, sublabel: None, tint: "#1e1428" },
    MediaItem { id: 2, kind: MediaKind::Image, src: Some("/media/editorial/still-02.webp"), label: None, sublabel: None, tint: "#201a14" },
    MediaItem { id: 3, kind: MediaKind::Image, src: Some("/media/editorial/still-03.webp"), label: None, sublabel: None, tint: "#14201a" },
    MediaItem { id: 4, kind: MediaKind::Image, src: Some("/media/editorial/still-04.webp"), label: None, sublabel: None, tint: "#1a1428" },
    MediaItem { id: 5, kind: MediaKind::Image, src: Some("/media/editorial/still-05.webp"), label: None, sublabel: None, tint: "#28141e" },
    MediaItem { id: 6, kind: MediaKind::Image, src: Some("/media/editorial/still-06.webp"), label: None, sublabel: None, tint: "#142028" },
    MediaItem { id: 7, kind: MediaKind::Image, src: Some("/media/editorial/still-07.webp"), label: None, sublabel: None, tint: "#201e14" },
    MediaItem { id: 8, kind: MediaKind::Image, src: Some("/media/editorial/still-08.webp"), label: None, sublabel: None, tint: "#281420" },
    MediaItem { id: 9, kind: MediaKind::Image, src: Some("/media/editorial/still-09.webp"), label: None, sublabel: None, tint: "#1a2014" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_ids(items: &[MediaItem]) {
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate id {} in gallery", a.id);
            }
        }
    }

    #[test]
    fn gallery_ids_are_unique() {
        assert_unique_ids(HERO_ITEMS);
        assert_unique_ids(WORK_ITEMS);
        assert_unique_ids(UGC_ITEMS);
        assert_unique_ids(EDITORIAL_ITEMS);
    }

    #[test]
    fn sources_are_site_relative() {
        for item in [HERO_ITEMS, WORK_ITEMS, UGC_ITEMS, EDITORIAL_ITEMS].concat() {
            let src = item.src.expect("catalog items ship with a source");
            assert!(src.starts_with("/media/"), "unexpected source {src}");
        }
    }

    #[test]
    fn hero_priority_index_is_in_bounds() {
        assert!(HERO_PRIORITY_INDEX < HERO_ITEMS.len());
    }

    #[test]
    fn showcase_rows_carry_captions() {
        for item in [WORK_ITEMS, UGC_ITEMS].concat() {
            assert!(item.label.is_some());
            assert!(item.sublabel.is_some());
        }
    }

    #[test]
    fn editorial_grid_is_imagery_only() {
        assert_eq!(EDITORIAL_ITEMS.len(), 9);
        for item in EDITORIAL_ITEMS {
            assert_eq!(item.kind, MediaKind::Image);
            assert!(item.label.is_none());
        }
    }
}
