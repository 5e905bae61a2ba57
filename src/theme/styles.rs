//! Global CSS for the doccards desktop host.
//!
//! Only page chrome lives here. Card colours are inline styles resolved by
//! `doccards_core::CardStyle`.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Theme Modes === */
.app {
  min-height: 100vh;
  transition: background 150ms ease, color 150ms ease;
}

.app.theme-light {
  background: #ffffff;
  color: #111827;
}

.app.theme-dark {
  background: #111111;
  color: #f3f4f6;
}

/* === Page Layout === */
.docs-page {
  max-width: 900px;
  margin: 0 auto;
  padding: 3rem 2rem;
}

.docs-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.docs-title {
  font-size: 2rem;
  font-weight: 700;
}

.docs-intro {
  margin-top: 1rem;
  opacity: 0.8;
}

.theme-toggle {
  padding: 0.4rem 0.9rem;
  border-radius: 6px;
  border: 1px solid #52BAFF;
  background: transparent;
  color: inherit;
  font: inherit;
  cursor: pointer;
}

.theme-toggle:hover {
  background: #52BAFF1A;
}

/* === Cards === */
.selection-card {
  cursor: pointer;
}

/* === Documentation Placeholder === */
.doc-path {
  margin-top: 1rem;
  font-family: 'SF Mono', 'Consolas', monospace;
  color: #52BAFF;
}

.back-link {
  display: inline-block;
  margin-top: 2rem;
  color: #52BAFF;
}
"#;
