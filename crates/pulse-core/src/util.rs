use rand::Rng;

pub const ARCADE_ID_LEN: usize = 16;

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// An identifier counts as unset when empty or holding a placeholder sentinel.
pub fn id_is_set(id: &str) -> bool {
    !(id.is_empty() || id == "-1" || id == "0")
}

/// Generate a random arcade id for a level that has no identifier of its own.
pub fn random_arcade_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ARCADE_ID_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect()
}
