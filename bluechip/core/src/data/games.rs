use crate::model::{Game, ItemId};

struct Entry {
    id: u64,
    title: &'static str,
    provider: &'static str,
    category: &'static str,
    is_hot: bool,
    is_new: bool,
}

const ENTRIES: &[Entry] = &[
    Entry { id: 1, title: "Aviator", provider: "Spribe", category: "crash", is_hot: true, is_new: false },
    Entry { id: 2, title: "Crazy Time", provider: "Evolution", category: "live", is_hot: true, is_new: false },
    Entry { id: 3, title: "Lightning Roulette", provider: "Evolution", category: "live", is_hot: false, is_new: false },
    Entry { id: 4, title: "Elvis Frog in Vegas", provider: "BGaming", category: "slots", is_hot: false, is_new: true },
    Entry { id: 5, title: "JetX", provider: "SmartSoft", category: "crash", is_hot: true, is_new: false },
    Entry { id: 6, title: "Mines", provider: "Spribe", category: "crash", is_hot: false, is_new: false },
    Entry { id: 7, title: "Book of Cats", provider: "BGaming", category: "slots", is_hot: false, is_new: true },
    Entry { id: 8, title: "Hot Slot: 777 Coins", provider: "Wazdan", category: "slots", is_hot: true, is_new: false },
    Entry { id: 9, title: "Crash X", provider: "Turbo Games", category: "crash", is_hot: false, is_new: true },
    Entry { id: 10, title: "Monopoly Live", provider: "Evolution", category: "live", is_hot: false, is_new: false },
    Entry { id: 11, title: "Plinko", provider: "Spribe", category: "table", is_hot: false, is_new: false },
    Entry { id: 12, title: "Sweet Rush Bonanza", provider: "VeliPlay", category: "jackpot", is_hot: false, is_new: true },
    Entry { id: 13, title: "Magic Spins", provider: "1XHIP Gaming", category: "slots", is_hot: false, is_new: false },
    Entry { id: 14, title: "Football X", provider: "SmartSoft", category: "crash", is_hot: true, is_new: true },
];

/// Sample lobby games shown in the home page rows.
pub fn games() -> Vec<Game> {
    ENTRIES
        .iter()
        .map(|entry| Game {
            id: ItemId::Number(entry.id),
            title: entry.title.to_string(),
            provider: Some(entry.provider.to_string()),
            image: Some(format!("/images/games/{}.png", entry.id)),
            is_hot: entry.is_hot,
            is_new: entry.is_new,
            category: Some(entry.category.to_string()),
            ..Default::default()
        })
        .collect()
}
