use crate::model::{ItemId, Provider};

fn provider(id: u64, name: &str, logo: &str, games_count: u32) -> Provider {
    Provider {
        id: ItemId::Number(id),
        name: name.to_string(),
        logo: Some(format!("/images/providers/{logo}")),
        games_count: Some(games_count),
        ..Default::default()
    }
}

/// Game studios featured on the home page.
pub fn providers() -> Vec<Provider> {
    vec![
        provider(1, "Evolution", "image7.png", 312),
        provider(2, "Spribe", "image9.png", 12),
        provider(3, "VeliPlay", "image9.png", 9),
        provider(4, "Turbo Games", "image10.png", 28),
        provider(5, "SmartSoft", "image11.png", 37),
        provider(6, "1XHIP Gaming", "image12.png", 7),
        provider(7, "BGaming", "image13.png", 146),
        provider(8, "Wazdan", "image14.png", 172),
    ]
}
