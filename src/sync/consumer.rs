/// The downstream renderer, as seen from the core. These are the only two
/// operations the core ever calls on it.
pub trait Consumer {
    fn set_loading(&mut self, loading: bool);

    fn set_canonical_json(&mut self, json: &str);
}
