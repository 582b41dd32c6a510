//! Images bundled into the executable, as (file name, encoded bytes).

pub static EMBEDDED: &[(&str, &[u8])] = &[
    ("ball.png", include_bytes!("images/ball.png")),
    ("card.png", include_bytes!("images/card.png")),
    ("checker.png", include_bytes!("images/checker.png")),
];
