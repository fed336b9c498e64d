//! Card, deck, and player tests.

use std::cmp::Ordering;
use std::collections::HashSet;

use warrs::{
    Card, CardList, DECK_SIZE, Deck, DeckError, Player, PlayerKind, Rank, Suit, highest,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn ranks_are_ordered_by_value() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Ace.value(), 14);
    assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    assert!(Rank::Jack < Rank::Queen && Rank::King < Rank::Ace);
}

#[test]
fn card_comparison_ignores_suit() {
    let king_h = card(Rank::King, Suit::Hearts);
    let king_s = card(Rank::King, Suit::Spades);
    let ace_c = card(Rank::Ace, Suit::Clubs);

    assert_eq!(king_h.compare(&king_s), Ordering::Equal);
    assert_ne!(king_h, king_s);
    assert_eq!(ace_c.compare(&king_h), Ordering::Greater);
    assert_eq!(king_s.compare(&ace_c), Ordering::Less);
}

#[test]
fn cards_display_rank_and_suit() {
    assert_eq!(card(Rank::King, Suit::Spades).to_string(), "King of ♠");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10 of ♥");

    let cards = [
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
    ];
    assert_eq!(CardList(&cards).to_string(), "2 of ♦, Queen of ♣");
    assert_eq!(CardList(&[]).to_string(), "");
}

#[test]
fn highest_picks_top_rank() {
    let cards = [
        card(Rank::Four, Suit::Hearts),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ];
    assert_eq!(highest(&cards), Some(card(Rank::Jack, Suit::Clubs)));
    assert_eq!(highest(&[] as &[Card]), None);
}

#[test]
fn reset_builds_52_unique_cards() {
    let mut deck = Deck::new(9);
    for _ in 0..10 {
        deck.draw();
    }
    deck.reset();

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(rank, suit)));
        }
    }
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new(5);
    let before: HashSet<Card> = deck.iter().copied().collect();
    deck.shuffle();
    let after: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(before, after);
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn same_seed_gives_same_order() {
    let a: Vec<Card> = Deck::new(17).iter().copied().collect();
    let b: Vec<Card> = Deck::new(17).iter().copied().collect();
    let c: Vec<Card> = Deck::new(18).iter().copied().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn draw_takes_from_the_front_and_shrinks() {
    let mut deck = Deck::from_cards(vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
    ])
    .unwrap();

    assert_eq!(deck.draw(), Some(card(Rank::Two, Suit::Hearts)));
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.draw(), Some(card(Rank::Three, Suit::Hearts)));
    assert!(deck.is_empty());
}

#[test]
fn draw_on_empty_deck_returns_none() {
    let mut deck = Deck::from_cards(Vec::new()).unwrap();
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.len(), 0);
}

#[test]
fn fixed_deck_rejects_more_than_52_cards() {
    let cards = vec![card(Rank::Ace, Suit::Spades); 60];
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        DeckError::TooManyCards(60)
    );
}

#[test]
fn fixed_deck_rejects_duplicate_cards() {
    let cards = vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
    ];
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        DeckError::DuplicateCard(card(Rank::Ace, Suit::Spades))
    );

    // Same rank in another suit is a different card.
    let cards = vec![card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)];
    assert_eq!(Deck::from_cards(cards).unwrap().len(), 2);
}

#[test]
fn fixed_deck_accepts_a_full_deck() {
    let cards: Vec<Card> = Deck::new(3).iter().copied().collect();
    assert_eq!(Deck::from_cards(cards).unwrap().len(), DECK_SIZE);
}

#[test]
fn player_hand_is_first_in_first_out() {
    let mut player = Player::new("Bob", PlayerKind::Ai);
    assert_eq!(player.name(), "Bob");
    assert_eq!(player.score(), 0);
    assert!(!player.has_cards());
    assert_eq!(player.play_card(), None);

    player.receive_card(card(Rank::Five, Suit::Clubs));
    player.receive_card(card(Rank::Ace, Suit::Clubs));
    player.receive_card(card(Rank::Three, Suit::Clubs));
    assert_eq!(player.hand_len(), 3);
    assert_eq!(player.highest_card(), Some(card(Rank::Ace, Suit::Clubs)));

    assert_eq!(player.play_card(), Some(card(Rank::Five, Suit::Clubs)));
    assert_eq!(player.play_card(), Some(card(Rank::Ace, Suit::Clubs)));
    assert_eq!(player.hand_len(), 1);
}
