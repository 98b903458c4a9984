use std::sync::Mutex;

/// A writable text region. Every write replaces the whole content.
pub trait DisplaySurface: Send + Sync {
    fn replace(&self, text: &str);
}

/// Keeps the current text plus every write, in order.
#[derive(Debug, Default)]
pub struct MemorySurface {
    writes: Mutex<Vec<String>>,
}

impl MemorySurface {
    pub fn new() -> MemorySurface {
        MemorySurface::default()
    }

    pub fn text(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // a panicking writer cannot leave a half-written String behind
        self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySurface for MemorySurface {
    fn replace(&self, text: &str) {
        self.lock().push(text.to_string());
    }
}

/// Prints each replacement as its own block on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSurface;

impl DisplaySurface for StdoutSurface {
    fn replace(&self, text: &str) {
        println!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_replaces_wholesale() {
        let surface = MemorySurface::new();
        assert_eq!(surface.text(), "");

        surface.replace("Loading...");
        surface.replace("done");
        assert_eq!(surface.text(), "done");
        assert_eq!(surface.history(), vec!["Loading...", "done"]);
    }
}
