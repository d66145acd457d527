// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager walkthrough: drive a four-page pager through a scroll, a settle,
//! a rotation into a two-page spread, and a programmatic jump.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_pager_demos --example pager_walkthrough`

use kurbo::{Point, Rect, Size};
use understory_pager::{
    ContentUnit, DualPageLayout, Pager, PagerDelegate, ScrollSurface, Viewport,
};

#[derive(Debug)]
struct ColorPage {
    name: &'static str,
    frame: Rect,
}

impl ContentUnit for ColorPage {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn did_attach(&mut self) {
        println!("  + {} at {:?}", self.name, self.frame);
    }

    fn will_detach(&mut self) {
        println!("  - {} from {:?}", self.name, self.frame);
    }
}

#[derive(Debug, Default)]
struct Palette;

impl PagerDelegate for Palette {
    type Content = ColorPage;

    fn page_count(&self) -> usize {
        4
    }

    fn content_at(&mut self, index: usize) -> ColorPage {
        let name = match index {
            0 => "red",
            1 => "blue",
            2 => "green",
            3 => "yellow",
            _ => "gray",
        };
        ColorPage {
            name,
            frame: Rect::ZERO,
        }
    }

    fn page_index_changed(&mut self, index: usize) {
        println!("page -> {index}");
    }

    fn scroll_progress_updated(&mut self, progress: f64) {
        println!("progress {progress:.2}");
    }
}

fn main() {
    env_logger::init();

    let portrait = Size::new(320.0, 568.0);
    let mut pager = Pager::with_layout(Viewport::new(portrait), DualPageLayout::default());

    println!("attach delegate");
    pager.set_delegate(Some(Palette));
    pager.on_scroll_settled();

    println!("drag to the second page");
    for x in [80.0, 160.0, 240.0, 320.0] {
        pager.surface_mut().set_content_offset(Point::new(x, 0.0));
        pager.on_scrolled();
    }
    pager.on_scroll_settled();

    println!("rotate to landscape");
    pager.on_size_changed(Size::new(640.0, 320.0));
    log::info!(
        "page size {:?}, visible {:?}",
        pager.page_size(),
        pager.visible_range()
    );

    println!("jump to the last spread");
    pager.scroll_to_index(3, true);
    pager.on_scroll_animation_finished(true);
    pager.on_scroll_settled();

    println!(
        "materialized: {:?}",
        pager.pages().materialized().collect::<Vec<_>>()
    );
}
