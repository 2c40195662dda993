//! Button column layout.
//!
//! Uses Taffy's flexbox implementation to place the link buttons in a
//! centered column below the title band, in scene pixel space. The scene
//! re-runs layout whenever the viewport or button set changes.

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId,
    Rect, Size, Style, TaffyTree,
};

use crate::types::{PxRect, Viewport};

/// Buttons never grow wider than this, px.
pub const BUTTON_MAX_WIDTH_PX: f32 = 400.0;

/// Fixed button height, px.
pub const BUTTON_HEIGHT_PX: f32 = 60.0;

/// Vertical gap between buttons, px.
pub const BUTTON_GAP_PX: f32 = 20.0;

/// Space reserved above the column for the title band, px.
pub const COLUMN_TOP_PX: f32 = 140.0;

/// Horizontal breathing room on narrow viewports, px.
pub const COLUMN_SIDE_PADDING_PX: f32 = 20.0;

/// Compute pixel rects for `count` buttons in a centered column.
///
/// Rects are in scene space (unscrolled); the column may extend past the
/// viewport bottom, which is what the scroll offset and the visibility
/// animator exist for.
pub fn layout_buttons(viewport: &Viewport, count: usize) -> Vec<PxRect> {
    if count == 0 {
        return Vec::new();
    }

    let viewport_w = viewport.px_width as f32;
    let button_width = (viewport_w - 2.0 * COLUMN_SIDE_PADDING_PX).min(BUTTON_MAX_WIDTH_PX);

    let mut tree: TaffyTree<()> = TaffyTree::new();

    let button_style = Style {
        size: Size {
            width: Dimension::Length(button_width),
            height: Dimension::Length(BUTTON_HEIGHT_PX),
        },
        ..Default::default()
    };

    let children: Vec<NodeId> = (0..count)
        .map(|_| tree.new_leaf(button_style.clone()).unwrap())
        .collect();

    let root_style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        align_items: Some(AlignItems::Center),
        gap: Size {
            width: LengthPercentage::Length(0.0),
            height: LengthPercentage::Length(BUTTON_GAP_PX),
        },
        padding: Rect {
            left: LengthPercentage::Length(COLUMN_SIDE_PADDING_PX),
            right: LengthPercentage::Length(COLUMN_SIDE_PADDING_PX),
            top: LengthPercentage::Length(COLUMN_TOP_PX),
            bottom: LengthPercentage::Length(COLUMN_TOP_PX / 2.0),
        },
        size: Size {
            width: Dimension::Length(viewport_w),
            height: Dimension::Auto,
        },
        ..Default::default()
    };

    let root = tree.new_with_children(root_style, &children).unwrap();

    let _ = tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(viewport_w),
            height: AvailableSpace::MaxContent,
        },
    );

    children
        .iter()
        .map(|&child| {
            let layout = tree.layout(child).unwrap();
            PxRect::new(
                layout.location.x,
                layout.location.y,
                layout.size.width,
                layout.size.height,
            )
        })
        .collect()
}

/// Total scene content height for `count` buttons, px.
pub fn content_height(count: usize) -> f32 {
    if count == 0 {
        return COLUMN_TOP_PX;
    }
    COLUMN_TOP_PX
        + count as f32 * BUTTON_HEIGHT_PX
        + (count - 1) as f32 * BUTTON_GAP_PX
        + COLUMN_TOP_PX / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout() {
        let rects = layout_buttons(&Viewport::new(100, 30, 1024, 768), 0);
        assert!(rects.is_empty());
    }

    #[test]
    fn test_column_is_centered_and_stacked() {
        let viewport = Viewport::new(100, 30, 1024, 768);
        let rects = layout_buttons(&viewport, 3);
        assert_eq!(rects.len(), 3);

        for rect in &rects {
            assert_eq!(rect.width, BUTTON_MAX_WIDTH_PX);
            assert_eq!(rect.height, BUTTON_HEIGHT_PX);
            // Centered: (1024 - 400) / 2
            assert!((rect.x - 312.0).abs() < 1.0);
        }

        assert!((rects[0].y - COLUMN_TOP_PX).abs() < 1.0);
        let expected_step = BUTTON_HEIGHT_PX + BUTTON_GAP_PX;
        assert!((rects[1].y - rects[0].y - expected_step).abs() < 1.0);
        assert!((rects[2].y - rects[1].y - expected_step).abs() < 1.0);
    }

    #[test]
    fn test_narrow_viewport_shrinks_buttons() {
        let viewport = Viewport::new(40, 30, 320, 480);
        let rects = layout_buttons(&viewport, 1);
        assert_eq!(rects[0].width, 320.0 - 2.0 * COLUMN_SIDE_PADDING_PX);
    }

    #[test]
    fn test_content_height_matches_layout() {
        let viewport = Viewport::new(100, 30, 1024, 768);
        let rects = layout_buttons(&viewport, 5);
        let last = rects.last().unwrap();
        assert!((content_height(5) - (last.bottom() + COLUMN_TOP_PX / 2.0)).abs() < 1.0);
    }
}
