use super::*;
use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH};

#[test]
fn empty_batch_yields_empty_output() {
    let renderer = renderer();
    assert!(renderer.render_all(&[]).is_empty());
}

#[test]
fn batch_yields_one_bitmap_per_slide_in_order() {
    let renderer = renderer();
    let slides: Vec<Slide> = (1..=4)
        .map(|i| Slide::new(i).with_title(format!("Slide number {i}")))
        .collect();

    let batch = renderer.render_all(&slides);
    assert_eq!(batch.len(), slides.len());
    for rendered in &batch {
        assert_eq!(rendered.image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    // Order is preserved: each batch entry matches its single render.
    for (slide, rendered) in slides.iter().zip(&batch) {
        let single = renderer.render_slide(slide, None);
        assert_eq!(single.image.as_raw(), rendered.image.as_raw());
    }
}

#[test]
fn one_bad_slide_cannot_sink_its_siblings() {
    // Even a pathological slide produces a bitmap; siblings render as
    // usual. There are no fatal errors inside the core.
    let renderer = renderer();
    let pathological = Slide::new(2)
        .with_title("\u{0}\u{1}\u{2}")
        .with_bullets(vec![String::new(); 6]);
    let slides = vec![sample_slide(), pathological, sample_slide()];
    let batch = renderer.render_all(&slides);
    assert_eq!(batch.len(), 3);
    for rendered in &batch {
        assert_eq!(rendered.image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}
