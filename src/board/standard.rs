//! The classic 40-cell board and its two decks.

use super::{Board, Cell, CellCategory};
use crate::cards::{CardEffect, CardTable, DeckKind};

use CellCategory::{Chance, CommunityChest, RailRoad, Street, Utility};

const RAILROAD_RENT: [i64; 4] = [25, 50, 100, 200];
const UTILITY_RENT: [i64; 2] = [4, 10];

/// Classic board: 22 streets, 4 railroads, 2 utilities, 2 taxes,
/// 3 Chance and 3 Community Chest cells, and the four corners.
///
/// ```
/// use board_sim::board::{Board, CellCategory, StandardBoard};
///
/// let board = StandardBoard::new();
/// assert_eq!(board.total_cells(), 40);
/// assert_eq!(board.name(39), "Boardwalk");
/// assert_eq!(board.category(30), CellCategory::Jail);
/// ```
#[derive(Clone, Debug)]
pub struct StandardBoard {
    cells: Vec<Cell>,
    chance: CardTable,
    community: CardTable,
}

impl Default for StandardBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardBoard {
    /// Build the classic board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: classic_cells(),
            chance: chance_cards(),
            community: community_cards(),
        }
    }
}

impl Board for StandardBoard {
    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn cards(&self, deck: DeckKind) -> &CardTable {
        match deck {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community,
        }
    }
}

fn classic_cells() -> Vec<Cell> {
    vec![
        Cell::plain("Go", CellCategory::None),
        Cell::property("Mediterranean Avenue", Street, 60, &[2, 10, 30, 90, 160, 250]),
        Cell::plain("Community Chest", CommunityChest),
        Cell::property("Baltic Avenue", Street, 60, &[4, 20, 60, 180, 320, 450]),
        Cell::tax("Income Tax", 200),
        Cell::property("Reading Railroad", RailRoad, 200, &RAILROAD_RENT),
        Cell::property("Oriental Avenue", Street, 100, &[6, 30, 90, 270, 400, 550]),
        Cell::plain("Chance", Chance),
        Cell::property("Vermont Avenue", Street, 100, &[6, 30, 90, 270, 400, 550]),
        Cell::property("Connecticut Avenue", Street, 120, &[8, 40, 100, 300, 450, 600]),
        Cell::plain("Just Visiting", CellCategory::None),
        Cell::property("St. Charles Place", Street, 140, &[10, 50, 150, 450, 625, 750]),
        Cell::property("Electric Company", Utility, 150, &UTILITY_RENT),
        Cell::property("States Avenue", Street, 140, &[10, 50, 150, 450, 625, 750]),
        Cell::property("Virginia Avenue", Street, 160, &[12, 60, 180, 500, 700, 900]),
        Cell::property("Pennsylvania Railroad", RailRoad, 200, &RAILROAD_RENT),
        Cell::property("St. James Place", Street, 180, &[14, 70, 200, 550, 750, 950]),
        Cell::plain("Community Chest", CommunityChest),
        Cell::property("Tennessee Avenue", Street, 180, &[14, 70, 200, 550, 750, 950]),
        Cell::property("New York Avenue", Street, 200, &[16, 80, 220, 600, 800, 1000]),
        Cell::plain("Free Parking", CellCategory::None),
        Cell::property("Kentucky Avenue", Street, 220, &[18, 90, 250, 700, 875, 1050]),
        Cell::plain("Chance", Chance),
        Cell::property("Indiana Avenue", Street, 220, &[18, 90, 250, 700, 875, 1050]),
        Cell::property("Illinois Avenue", Street, 240, &[20, 100, 300, 750, 925, 1100]),
        Cell::property("B. & O. Railroad", RailRoad, 200, &RAILROAD_RENT),
        Cell::property("Atlantic Avenue", Street, 260, &[22, 110, 330, 800, 975, 1150]),
        Cell::property("Ventnor Avenue", Street, 260, &[22, 110, 330, 800, 975, 1150]),
        Cell::property("Water Works", Utility, 150, &UTILITY_RENT),
        Cell::property("Marvin Gardens", Street, 280, &[24, 120, 360, 850, 1025, 1200]),
        Cell::plain("Go To Jail", CellCategory::Jail),
        Cell::property("Pacific Avenue", Street, 300, &[26, 130, 390, 900, 1100, 1275]),
        Cell::property("North Carolina Avenue", Street, 300, &[26, 130, 390, 900, 1100, 1275]),
        Cell::plain("Community Chest", CommunityChest),
        Cell::property("Pennsylvania Avenue", Street, 320, &[28, 150, 450, 1000, 1200, 1400]),
        Cell::property("Short Line", RailRoad, 200, &RAILROAD_RENT),
        Cell::plain("Chance", Chance),
        Cell::property("Park Place", Street, 350, &[35, 175, 500, 1100, 1300, 1500]),
        Cell::tax("Luxury Tax", 100),
        Cell::property("Boardwalk", Street, 400, &[50, 200, 600, 1400, 1700, 2000]),
    ]
}

fn chance_cards() -> CardTable {
    [
        ("Advance to Go (Collect $200)", CardEffect::AdvanceTo(0)),
        ("Advance to Illinois Avenue", CardEffect::AdvanceTo(24)),
        ("Advance to St. Charles Place", CardEffect::AdvanceTo(11)),
        ("Advance token to nearest Utility", CardEffect::AdvanceToNearest(Utility)),
        ("Advance token to the nearest Railroad", CardEffect::AdvanceToNearest(RailRoad)),
        ("Advance token to the nearest Railroad", CardEffect::AdvanceToNearest(RailRoad)),
        ("Bank pays you dividend of $50", CardEffect::BankSettlement(50)),
        ("Get Out of Jail Free", CardEffect::GetOutOfJail),
        ("Go Back 3 Spaces", CardEffect::MoveRelative(-3)),
        ("Go to Jail", CardEffect::GoToJail),
        ("Make general repairs on all your property", CardEffect::Unmodeled),
        ("Pay poor tax of $15", CardEffect::BankSettlement(-15)),
        ("Take a trip to Reading Railroad", CardEffect::AdvanceTo(5)),
        ("Take a walk on the Boardwalk", CardEffect::AdvanceTo(39)),
        ("You have been elected Chairman of the Board, pay each player $50", CardEffect::PayEachPlayer(50)),
        ("Your building loan matures, collect $150", CardEffect::BankSettlement(150)),
    ]
    .into_iter()
    .collect()
}

fn community_cards() -> CardTable {
    [
        ("Advance to Go (Collect $200)", CardEffect::AdvanceTo(0)),
        ("Bank error in your favor, collect $200", CardEffect::BankSettlement(200)),
        ("Doctor's fees, pay $50", CardEffect::BankSettlement(-50)),
        ("From sale of stock you get $50", CardEffect::BankSettlement(50)),
        ("Get Out of Jail Free", CardEffect::GetOutOfJail),
        ("Go to Jail", CardEffect::GoToJail),
        ("Grand Opera Night, collect $50 from every player", CardEffect::PayEachPlayer(-50)),
        ("Holiday fund matures, receive $100", CardEffect::BankSettlement(100)),
        ("Income tax refund, collect $20", CardEffect::BankSettlement(20)),
        ("It is your birthday, collect $10 from every player", CardEffect::PayEachPlayer(-10)),
        ("Life insurance matures, collect $100", CardEffect::BankSettlement(100)),
        ("Hospital fees, pay $100", CardEffect::BankSettlement(-100)),
        ("School fees, pay $50", CardEffect::BankSettlement(-50)),
        ("Receive $25 consultancy fee", CardEffect::BankSettlement(25)),
        ("You are assessed for street repairs", CardEffect::Unmodeled),
        ("You have won second prize in a beauty contest, collect $10", CardEffect::BankSettlement(10)),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_layout_counts() {
        let board = StandardBoard::new();
        let count = |category| board.cells().iter().filter(|c| c.category == category).count();

        assert_eq!(count(Street), 22);
        assert_eq!(count(RailRoad), 4);
        assert_eq!(count(Utility), 2);
        assert_eq!(count(Chance), 3);
        assert_eq!(count(CommunityChest), 3);
        assert_eq!(count(CellCategory::Tax), 2);
        assert_eq!(count(CellCategory::Jail), 1);
    }

    #[test]
    fn test_lookups() {
        let board = StandardBoard::new();

        assert_eq!(board.price(1), 60);
        assert_eq!(board.rent(39)[0], 50);
        assert_eq!(board.tax(4), 200);
        assert_eq!(board.tax(1), 0);
        assert!(board.rent(0).is_empty());
        assert_eq!(board.category(40), CellCategory::None);
        assert_eq!(board.name(40), "In Jail");
    }

    #[test]
    fn test_decks() {
        let board = StandardBoard::new();

        assert_eq!(board.deck_size(DeckKind::Chance), 16);
        assert_eq!(board.deck_size(DeckKind::CommunityChest), 16);

        let first = board.card(DeckKind::Chance, CardId::new(0)).unwrap();
        assert_eq!(first.effect, CardEffect::AdvanceTo(0));
        let back = board.card(DeckKind::Chance, CardId::new(8)).unwrap();
        assert_eq!(back.effect, CardEffect::MoveRelative(-3));
        let jail_free = board.card(DeckKind::CommunityChest, CardId::new(4)).unwrap();
        assert_eq!(jail_free.effect, CardEffect::GetOutOfJail);
    }

    #[test]
    fn test_next_of_category_wraps() {
        let board = StandardBoard::new();

        assert_eq!(board.next_of_category(7, RailRoad), Some(15));
        assert_eq!(board.next_of_category(36, RailRoad), Some(5));
        assert_eq!(board.next_of_category(22, Utility), Some(28));
        assert_eq!(board.next_of_category(36, Utility), Some(12));
    }
}
