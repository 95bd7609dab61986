// ============================================================================
// CONFIRM SERVICE - Blocking yes/no gate before destructive actions
// ============================================================================

pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// window.confirm(); an unavailable window counts as "no"
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirmer;

#[cfg(target_arch = "wasm32")]
impl Confirmer for BrowserConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
