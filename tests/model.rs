//! Card, deck and hand tests.

use std::collections::HashSet;

use bjtable::{
    Advice, Card, DECK_SIZE, DealerHand, Deck, DeckError, Hand, RoundOutcome, Statistics, Suit,
    advise, resolve,
};

fn hand(codes: &[&str]) -> Hand {
    let mut hand = Hand::new();
    for code in codes {
        hand.acquire(code.parse().unwrap());
    }
    hand
}

#[test]
fn shuffled_deck_deals_every_card_once() {
    let mut deck = Deck::new(5);
    let mut seen = HashSet::new();

    while deck.has_next() {
        let card = deck.draw().unwrap();
        assert!(!card.is_face_down());
        assert!(seen.insert((card.suit(), card.rank())));
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(deck.remaining(), 0);
    assert!(!deck.has_next());
    assert_eq!(deck.draw().unwrap_err(), DeckError::Exhausted);
}

#[test]
fn shuffle_resets_the_cursor() {
    let mut deck = Deck::new(11);
    for _ in 0..30 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.remaining(), 22);

    deck.shuffle();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(deck.has_next());
}

#[test]
fn shuffles_vary_the_first_card() {
    let mut deck = Deck::new(2024);
    let mut firsts = HashSet::new();
    for _ in 0..20 {
        deck.shuffle();
        let first = deck.draw().unwrap();
        firsts.insert((first.suit(), first.rank()));
    }
    assert!(firsts.len() > 1);
}

#[test]
fn same_seed_same_order() {
    let a = Deck::new(77);
    let b = Deck::new(77);
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn value_without_aces_is_rank_sum() {
    assert_eq!(hand(&["2H", "3D", "4S"]).value(), 9);
    assert_eq!(hand(&["10H", "JD", "QS", "KC"]).value(), 40);
    assert_eq!(hand(&[]).value(), 0);
}

#[test]
fn ace_adds_eleven_or_one() {
    let non_aces = ["2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "10C", "JC"];
    for a in non_aces {
        for b in non_aces {
            let base = hand(&[a, b]);
            let mut with_ace = base.clone();
            with_ace.acquire(Card::new(Suit::Spades, 1));

            let expected = if base.value() <= 10 { 11 } else { 1 };
            assert_eq!(with_ace.value(), base.value() + expected, "{a} {b}");
            assert_eq!(with_ace.is_soft(), expected == 11);
        }
    }
}

#[test]
fn known_soft_and_hard_totals() {
    assert_eq!(hand(&["AH", "AD", "9S"]).value(), 21);
    assert_eq!(hand(&["AH", "AD"]).value(), 12);
    assert_eq!(hand(&["AH", "6D"]).value(), 17);
    assert!(hand(&["AH", "6D"]).is_soft());
    assert_eq!(hand(&["AH", "6D", "10S"]).value(), 17);
    assert!(!hand(&["AH", "6D", "10S"]).is_soft());
}

#[test]
fn bust_and_twenty_one_checks() {
    assert!(hand(&["10H", "10D", "2S"]).is_busted());
    assert!(!hand(&["10H", "AD"]).is_busted());

    let natural = hand(&["AH", "KD"]);
    assert!(natural.is_natural_21());
    assert!(natural.has_blackjack_immediately());

    let three_card = hand(&["7H", "7D", "7S"]);
    assert!(three_card.is_natural_21());
    assert!(!three_card.has_blackjack_immediately());
}

#[test]
fn dealer_hand_reveals_hidden_cards() {
    let mut dealer = DealerHand::new();
    dealer.acquire("KH".parse().unwrap(), true);
    dealer.acquire("6C".parse().unwrap(), false);
    dealer.acquire("AS".parse().unwrap(), true);

    assert!(dealer.is_hiding_cards());
    assert_eq!(dealer.hidden_count(), 2);
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.value(), 17);

    let revealed = dealer.reveal_one().unwrap();
    assert!(revealed.same_identity(&"KH".parse().unwrap()));
    assert_eq!(dealer.hidden_count(), 1);
    assert_eq!(dealer.visible_value(), 16);

    dealer.reveal_all();
    assert!(!dealer.is_hiding_cards());
    assert_eq!(dealer.reveal_one(), None);

    dealer.clear();
    assert!(dealer.is_empty());
}

#[test]
fn outcome_updates_one_counter() {
    let mut stats = Statistics::new();

    let result = resolve(&hand(&["10H", "QD"]), &hand(&["10S", "9C"]));
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    stats.record(result.outcome);
    assert_eq!((stats.wins, stats.losses, stats.draws), (1, 0, 0));

    let result = resolve(&hand(&["10H", "QD", "5C"]), &hand(&["10S", "7C"]));
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    stats.record(result.outcome);
    assert_eq!((stats.wins, stats.losses, stats.draws), (1, 1, 0));

    let result = resolve(&hand(&["10H", "8D"]), &hand(&["9S", "9C"]));
    assert_eq!(result.outcome, RoundOutcome::Draw);
    stats.record(result.outcome);
    assert_eq!((stats.wins, stats.losses, stats.draws), (1, 1, 1));
}

#[test]
fn advice_follows_hand_value() {
    assert_eq!(advise(&hand(&["5H", "6D"])), Advice::Hit);
    assert_eq!(advise(&hand(&["10H", "5D"])), Advice::UseJudgment);
    assert_eq!(advise(&hand(&["10H", "8D"])), Advice::Stay);
    assert_eq!(Advice::Stay.to_string(), "Recommendation: Stay.");
}
