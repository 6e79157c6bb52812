//! Element traits implemented outside the crate.

use std::any::Any;
use wordgrid_core::{
    Axis, Block, Container, Element, Insets, Leaf, Measure, Proposal, Rect, Size, TextBlock,
};

/// Stacks children top to bottom at their natural heights.
#[derive(Default)]
struct Stack {
    children: Vec<Element>,
    bounds: Rect,
    hidden: bool,
}

impl Measure for Stack {
    fn measure(&self, proposal: Proposal) -> Size {
        let mut size = Size::ZERO;
        for child in self.children.iter().filter(|c| !c.is_hidden()) {
            let s = child.measure(Proposal::new(proposal.max_width, None));
            size.width = size.width.max(s.width);
            size.height += s.height;
        }
        proposal.constrain(size)
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl Container for Stack {
    fn relayout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let mut y = bounds.y;
        for child in &mut self.children {
            let h = child.measure(Proposal::new(Some(bounds.width), None)).height;
            child.place(Rect::new(bounds.x, y, bounds.width, h));
            y += h;
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn child_frames(&self) -> Vec<Rect> {
        self.children.iter().map(Element::frame).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_external_container_places_children() {
    let mut element = Element::container(Stack {
        children: vec![
            Block::new(Size::new(10.0, 20.0)).into(),
            TextBlock::new("hi").into(),
        ],
        ..Stack::default()
    });

    element.place(Rect::new(5.0, 5.0, 100.0, 200.0));
    let frames = element.child_frames();
    assert_eq!(frames[0], Rect::new(5.0, 5.0, 100.0, 20.0));
    assert_eq!(frames[1].y, 25.0);
    assert!((frames[1].height - 16.0 * 1.2).abs() < 1e-4);
    assert_eq!(element.frame(), Rect::new(5.0, 5.0, 100.0, 200.0));
}

#[test]
fn test_downcast_to_external_container() {
    let mut element = Element::container(Stack::default());
    assert!(element.downcast_ref::<Stack>().is_some());

    element
        .downcast_mut::<Stack>()
        .unwrap()
        .children
        .push(Block::opaque().into());
    assert_eq!(element.downcast_ref::<Stack>().unwrap().children.len(), 1);

    let leaf = Element::leaf(Block::opaque());
    assert!(leaf.downcast_ref::<Stack>().is_none());
}

#[test]
fn test_text_wraps_under_width_bound() {
    let text = TextBlock::new("the quick brown fox").font_size(10.0);
    let one_line = text.measure(Proposal::unbounded());
    assert!((one_line.width - 19.0 * 6.0).abs() < 1e-3);

    let wrapped = text.measure(Proposal::new(Some(60.0), None));
    assert!(wrapped.width <= 60.0);
    assert!(wrapped.height > one_line.height);
}

#[test]
fn test_hidden_leaf_round_trip() {
    let mut element: Element = TextBlock::new("x").into();
    assert!(!element.is_hidden());
    element.set_hidden(true);
    assert!(element.is_hidden());
}

#[test]
fn test_insets_per_axis() {
    let mut insets = Insets::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(insets.near(Axis::Vertical), 1.0);
    assert_eq!(insets.far(Axis::Horizontal), 4.0);
    assert_eq!(insets.along(Axis::Horizontal), 6.0);

    insets.set_near(Axis::Horizontal, 9.0);
    assert_eq!(insets.left, 9.0);
}

#[test]
fn test_leaf_frame_recorded() {
    let mut block = Block::new(Size::new(4.0, 4.0));
    block.place(Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(Leaf::frame(&block), Rect::new(1.0, 2.0, 3.0, 4.0));
}
