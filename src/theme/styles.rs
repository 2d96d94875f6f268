//! Global CSS for the card maker.
//!
//! Night-sky background with gold accents, the same colors the card SVG uses.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #050a14;
  --night-lighter: #101a2c;
  --night-border: #1f2c44;

  /* GOLD (Titles, Borders, Primary actions) */
  --gold: #d4af37;
  --gold-bright: #f3d36b;
  --gold-glow: rgba(212, 175, 55, 0.35);

  /* PINE (Secondary actions) */
  --pine: #2f6b4f;
  --pine-glow: rgba(47, 107, 79, 0.4);

  /* TEXT */
  --text-primary: #f8f4e8;
  --text-secondary: rgba(248, 244, 232, 0.75);
  --text-muted: rgba(248, 244, 232, 0.5);

  /* SEMANTIC */
  --danger: #e0475b;
  --success: #4fbf7f;
  --info: #6f9cff;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-script: 'Great Vibes', 'Brush Script MT', cursive;
  --font-sans: 'Inter', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: radial-gradient(ellipse at top, var(--night-lighter), var(--night) 70%);
  color: var(--text-primary);
  font-family: var(--font-sans);
  overflow-x: hidden;
}

button {
  font-family: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: wait;
  opacity: 0.6;
}

.app {
  position: relative;
  z-index: 1;
  max-width: 480px;
  margin: 0 auto;
  padding: 2rem 1.25rem 3rem;
}

/* === Snowfall === */
.snowfall {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.snowflake {
  position: absolute;
  top: -10px;
  border-radius: 50%;
  background: #ffffff;
  animation-name: snowfall;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

@keyframes snowfall {
  0%   { transform: translate3d(0, -10px, 0); }
  50%  { transform: translate3d(12px, 50vh, 0); }
  100% { transform: translate3d(-8px, 105vh, 0); }
}

/* === Notice banner === */
.notice {
  position: sticky;
  top: 0.75rem;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-bottom: 1rem;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  background: var(--night-lighter);
  border: 1px solid var(--night-border);
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.45);
  animation: notice-in var(--transition-normal);
}

.notice--success { border-color: var(--success); }
.notice--error { border-color: var(--danger); }
.notice--info { border-color: var(--info); }

.notice__text {
  flex: 1;
  font-size: 0.95rem;
}

.notice__dismiss {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.notice__dismiss:hover { color: var(--text-primary); }

@keyframes notice-in {
  from { opacity: 0; transform: translateY(-8px); }
  to   { opacity: 1; transform: translateY(0); }
}

/* === Compose page === */
.compose-page {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.compose-page__header { text-align: center; }

.compose-page__title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  color: var(--gold);
  text-shadow: 0 0 18px var(--gold-glow);
}

.compose-page__subtitle {
  font-family: var(--font-script);
  font-size: 1.6rem;
  color: var(--gold-bright);
}

.compose-page__label {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.compose-page__input {
  padding: 0.8rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--night-border);
  background: rgba(16, 26, 44, 0.85);
  color: var(--text-primary);
  font-size: 1rem;
  transition: border-color var(--transition-fast);
}

.compose-page__input:focus {
  outline: none;
  border-color: var(--gold);
}

.compose-page__open {
  margin-top: 0.5rem;
  padding: 0.95rem;
  border: none;
  border-radius: 999px;
  background: linear-gradient(135deg, var(--gold), var(--gold-bright));
  color: var(--night);
  font-size: 1.1rem;
  font-weight: 700;
  box-shadow: 0 0 24px var(--gold-glow);
  transition: transform var(--transition-fast);
}

.compose-page__open:hover { transform: translateY(-2px); }

/* === Portrait picker === */
.portrait-picker {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  border: 2px dashed var(--night-border);
  border-radius: 14px;
  transition: border-color var(--transition-fast);
}

.portrait-picker--dragging { border-color: var(--gold); }

.portrait-picker__preview,
.portrait-picker__placeholder {
  width: 100%;
  aspect-ratio: 4 / 3;
  border-radius: 10px;
  object-fit: cover;
}

.portrait-picker__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(16, 26, 44, 0.6);
  color: var(--text-muted);
}

.portrait-picker__btn {
  padding: 0.6rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--gold);
  background: transparent;
  color: var(--gold);
}

/* === Present page === */
.present-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  animation: card-open 700ms cubic-bezier(0.2, 0.8, 0.2, 1);
}

.greeting-card {
  width: 100%;
  border-radius: 18px;
  box-shadow: 0 0 40px var(--gold-glow);
  overflow: hidden;
}

.greeting-card__svg svg {
  display: block;
  width: 100%;
  height: auto;
}

@keyframes card-open {
  from { opacity: 0; transform: scale(0.92) rotateX(12deg); }
  to   { opacity: 1; transform: scale(1) rotateX(0); }
}

.card-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.6rem;
}

.card-actions__btn {
  padding: 0.7rem 1.1rem;
  border-radius: 999px;
  border: 1px solid var(--night-border);
  background: var(--night-lighter);
  color: var(--text-primary);
  transition: border-color var(--transition-fast);
}

.card-actions__btn:hover { border-color: var(--gold); }

.card-actions__btn--share { background: var(--pine); border-color: var(--pine); }
.card-actions__btn--export { color: var(--night); background: var(--gold); border-color: var(--gold); }
"#;
