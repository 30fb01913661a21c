use primeval::evaluator::{Category, HandEvaluator, CLASS_COUNT};

#[test]
fn every_five_card_hand_is_classified() {
    let census = HandEvaluator::global().census().unwrap();
    assert_eq!(census.hands, 2_598_960);

    let expected = [
        (Category::StraightFlush, 40),
        (Category::FourOfAKind, 624),
        (Category::FullHouse, 3_744),
        (Category::Flush, 5_108),
        (Category::Straight, 10_200),
        (Category::ThreeOfAKind, 54_912),
        (Category::TwoPair, 123_552),
        (Category::Pair, 1_098_240),
        (Category::HighCard, 1_302_540),
    ];
    for (category, count) in expected {
        assert_eq!(census.count(category), count, "{category}");
    }
}

#[test]
fn category_ranges_tile_the_class_indices() {
    let mut next = 1u16;
    for category in Category::ALL {
        let (lo, hi) = category.class_range();
        assert_eq!(lo, next, "{category}");
        assert!(hi >= lo);
        next = hi + 1;
    }
    assert_eq!(usize::from(next - 1), CLASS_COUNT);

    let ev = HandEvaluator::global();
    for class in ev.eclasses().iter() {
        let (lo, hi) = class.category().class_range();
        assert!((lo..=hi).contains(&class.index()), "{class}");
    }
}
