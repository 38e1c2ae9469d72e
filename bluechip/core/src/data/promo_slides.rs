use crate::model::{ItemId, PromoSlide};

fn slide(id: u64, title: &str, subtitle: &str, link: &str, bg: &str) -> PromoSlide {
    PromoSlide {
        id: ItemId::Number(id),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        button_text: "JOIN AND WIN".to_string(),
        button_link: Some(link.to_string()),
        label: Some("Exclusive Tournament".to_string()),
        image: "/images/big.png".to_string(),
        bg_color: Some(bg.to_string()),
    }
}

/// Banners of the home page carousel.
pub fn promo_slides() -> Vec<PromoSlide> {
    vec![
        slide(
            1,
            "Piggy Christmas Tap:",
            "€35,000 For Your Win",
            "/promotions/christmas",
            "bg-teal-700",
        ),
        slide(
            2,
            "Piggy Christmas Tap:",
            "€35,000 For Your Win",
            "/promotions/cashback",
            "bg-teal-700",
        ),
        slide(
            3,
            "Weekly Race",
            "Win €100,000 Prize Pool",
            "/promotions/race",
            "bg-purple-700",
        ),
    ]
}
