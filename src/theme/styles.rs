//! Global CSS styles for Palmist.
//!
//! Warm cream-and-gold palette with soft glass cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CREAM (Backgrounds) */
  --cream: #fffbeb;
  --cream-deep: #fef3c7;
  --card-bg: rgba(255, 255, 255, 0.8);
  --card-bg-soft: rgba(255, 255, 255, 0.6);

  /* GOLD (Titles, Actions, Focus) */
  --gold-50: #fdf8ec;
  --gold-500: #c9972b;
  --gold-600: #a87a1c;
  --gold-700: #86601a;
  --gold-800: #6b4d17;
  --amber-600: #d97706;
  --gold-glow: rgba(201, 151, 43, 0.45);

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #374151;
  --text-muted: #6b7280;
  --text-faint: #9ca3af;

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-soft: #fef2f2;
  --border: #e5e7eb;
  --border-strong: #d1d5db;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.5rem;
  --text-5xl: 3.25rem;

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

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, #ffffff 0%, var(--cream) 50%, var(--cream-deep) 100%);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.page {
  min-height: 100vh;
  padding: 3rem 1rem;
}

.page--centered {
  display: flex;
  align-items: center;
  justify-content: center;
}

.card {
  background: var(--card-bg);
  backdrop-filter: blur(6px);
  border-radius: 1rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.18);
  padding: 2rem;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-4xl);
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: 1rem;
  background: linear-gradient(90deg, var(--gold-600), var(--gold-500), var(--amber-600));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.page-title--hero {
  font-size: var(--text-5xl);
  margin-bottom: 1.5rem;
}

.tagline {
  font-size: var(--text-2xl);
  font-weight: 300;
  color: var(--text-secondary);
  margin-bottom: 3rem;
}

.subtitle {
  color: var(--text-muted);
}

.lead {
  font-size: var(--text-xl);
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--gold-800);
  margin-bottom: 1rem;
}

/* === Buttons === */
.btn-primary,
.btn-submit {
  border: none;
  color: #ffffff;
  font-family: var(--font-sans);
  font-weight: 600;
  cursor: pointer;
  background: linear-gradient(90deg, var(--gold-500), var(--amber-600));
  box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.2);
  transition: transform var(--transition-fast), box-shadow var(--transition-normal);
}

.btn-primary {
  margin-top: 2rem;
  padding: 0.75rem 2rem;
  border-radius: 9999px;
  font-size: var(--text-base);
}

.btn-primary.btn--large {
  padding: 1rem 3rem;
  font-size: var(--text-lg);
}

.btn-primary:hover,
.btn-submit:hover:not(:disabled) {
  transform: scale(1.03);
  box-shadow: 0 10px 30px var(--gold-glow);
}

.btn-primary:active,
.btn-submit:active:not(:disabled) {
  transform: scale(0.98);
}

.btn-submit {
  width: 100%;
  margin-top: 2rem;
  padding: 1rem;
  border-radius: 0.5rem;
  font-size: var(--text-lg);
}

.btn-submit:disabled,
.btn--busy {
  background: var(--text-faint);
  cursor: not-allowed;
  transform: none;
}

.btn__busy {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
}

/* === Spinner === */
.spinner {
  animation: spin 1s linear infinite;
  color: #ffffff;
}

.spinner__track {
  opacity: 0.25;
}

.spinner__head {
  opacity: 0.75;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Form Fields === */
.form-field + .form-field {
  margin-top: 1.5rem;
}

.input-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 2px solid var(--border);
  border-radius: 0.5rem;
  background: #ffffff;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.input-field::placeholder {
  color: var(--text-faint);
}

.input-field:focus {
  outline: none;
  border-color: var(--gold-500);
}

.input-field--error {
  border-color: var(--danger);
}

.field-error {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--danger);
}

.form-banner {
  display: flex;
  gap: 0.5rem;
  align-items: flex-start;
  margin-bottom: 1.5rem;
  padding: 0.75rem 1rem;
  border: 1px solid var(--danger);
  border-radius: 0.5rem;
  background: var(--danger-soft);
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Palm Upload === */
.palm-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.palm-grid .form-field + .form-field {
  margin-top: 0;
}

.palm-drop {
  width: 100%;
  min-height: 11rem;
  padding: 1rem;
  border: 2px dashed var(--border-strong);
  border-radius: 0.5rem;
  background: transparent;
  text-align: center;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.palm-drop:hover:not(:disabled) {
  border-color: var(--gold-500);
}

.palm-drop:disabled {
  cursor: not-allowed;
  opacity: 0.7;
}

.palm-drop--error {
  border-color: var(--danger);
}

.palm-drop__placeholder {
  padding: 2rem 0;
  color: var(--text-faint);
  font-size: var(--text-sm);
}

.palm-drop__glyph {
  font-size: 2.25rem;
  margin-bottom: 0.5rem;
}

.palm-drop__preview {
  width: 100%;
  height: 10rem;
  object-fit: cover;
  border-radius: 0.5rem;
  margin-bottom: 0.5rem;
}

.palm-drop__name {
  display: block;
  font-size: var(--text-xs);
  color: var(--text-muted);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* === Landing === */
.landing {
  max-width: 56rem;
  text-align: center;
}

.landing__orb {
  font-size: 3.75rem;
  margin-bottom: 1.5rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 2rem;
  margin-top: 4rem;
}

.feature-card {
  background: var(--card-bg-soft);
  backdrop-filter: blur(4px);
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  padding: 1.5rem;
  text-align: center;
}

.feature-card__icon {
  font-size: 1.875rem;
  margin-bottom: 0.75rem;
}

.feature-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--gold-700);
  margin-bottom: 0.5rem;
}

.feature-card__body {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.feature-card--wide .feature-card__title {
  color: var(--text-primary);
}

/* === Intake === */
.intake {
  max-width: 42rem;
  margin: 0 auto;
}

.intake__header {
  text-align: center;
  margin-bottom: 2rem;
}

/* === Thank You === */
.thank-you {
  max-width: 42rem;
  width: 100%;
  text-align: center;
  padding: 3rem;
}

.thank-you__check {
  font-size: 4.5rem;
  margin-bottom: 1rem;
}

.submission-details {
  background: var(--gold-50);
  border-radius: 0.75rem;
  padding: 1.5rem;
  margin-bottom: 2rem;
  text-align: left;
  color: var(--text-secondary);
}

.submission-details p + p {
  margin-top: 0.5rem;
}

.detail-label {
  font-weight: 500;
}

.detail-muted {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.next-steps {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

/* === Motion === */
.fade-in {
  animation: fadeIn 0.7s ease both;
}

.fade-in--late {
  animation-delay: 0.6s;
}

.pop-in {
  animation: popIn 0.6s ease both;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes popIn {
  from { opacity: 0; transform: scale(0.9); }
  to { opacity: 1; transform: scale(1); }
}

@media (max-width: 720px) {
  .feature-grid,
  .palm-grid {
    grid-template-columns: 1fr;
  }

  .page-title--hero {
    font-size: var(--text-4xl);
  }
}
"#;
