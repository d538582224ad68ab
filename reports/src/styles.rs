//! CSS for the standalone report page.
//!
//! Dark "lab console" theme matching the app: slate background, cyan accent,
//! monospace headings. Selectors avoid `>` and `&` because the stylesheet is
//! emitted as escaped element text.

/// Complete CSS for the report document.
pub const REPORT_CSS: &str = r#"
:root {
    --bg-deep: #020617;
    --bg-panel: #0f172a;
    --bg-raised: #1e293b;
    --text-bright: #e2e8f0;
    --text-dim: #94a3b8;
    --text-muted: #475569;
    --border: rgba(255, 255, 255, 0.08);
    --accent: #22d3ee;
    --accent-pink: #f472b6;
    --risk-low: #10b981;
    --risk-intermediate: #eab308;
    --risk-elevated: #f97316;
    --risk-high: #ef4444;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --font-sans: 'Inter', system-ui, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg-deep);
    color: var(--text-bright);
    font-family: var(--font-sans);
    line-height: 1.6;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 32px 24px;
}

.report-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

/* Brand bar */
.report-nav {
    border-bottom: 1px solid var(--border);
    background: rgba(2, 6, 23, 0.9);
    padding: 16px 24px;
    display: flex;
    align-items: center;
    gap: 12px;
}

.brand-mark {
    width: 32px;
    height: 32px;
    border-radius: 6px;
    background: linear-gradient(45deg, #06b6d4, #2563eb);
    box-shadow: 0 0 15px rgba(6, 182, 212, 0.4);
}

.brand-title {
    font-family: var(--font-mono);
    font-weight: 700;
    letter-spacing: 0.1em;
}

.brand-sub {
    font-family: var(--font-mono);
    font-size: 10px;
    letter-spacing: 0.2em;
    color: var(--accent);
}

/* Report header */
.report-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 24px;
    border-bottom: 1px solid var(--border);
    padding-bottom: 24px;
    margin-bottom: 24px;
}

.report-title {
    font-family: var(--font-mono);
    font-size: 28px;
    margin: 0 0 4px;
}

.report-meta {
    font-family: var(--font-mono);
    font-size: 12px;
    color: var(--text-dim);
    letter-spacing: 0.05em;
}

.report-grid {
    display: grid;
    grid-template-columns: 200px 1fr;
    gap: 24px;
}

.panel {
    background: var(--bg-panel);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
    margin-bottom: 24px;
}

.panel h3 {
    font-family: var(--font-mono);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--accent);
    margin: 0 0 12px;
}

/* Risk */
.risk-badge {
    display: inline-block;
    padding: 2px 10px;
    border-radius: 999px;
    font-family: var(--font-mono);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    border: 1px solid currentColor;
}

.risk-low { color: var(--risk-low); }
.risk-intermediate { color: var(--risk-intermediate); }
.risk-elevated { color: var(--risk-elevated); }
.risk-high { color: var(--risk-high); }

.risk-gauge {
    text-align: center;
}

.gauge-caption {
    font-family: var(--font-mono);
    font-size: 12px;
    color: var(--text-dim);
}

/* Tables */
table {
    width: 100%;
    border-collapse: collapse;
    font-size: 14px;
}

th {
    text-align: left;
    font-family: var(--font-mono);
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--text-dim);
    border-bottom: 1px solid var(--border);
    padding: 8px 6px;
}

td {
    border-bottom: 1px solid var(--border);
    padding: 8px 6px;
}

.probability-bar {
    height: 4px;
    border-radius: 2px;
    background: var(--bg-raised);
    overflow: hidden;
}

.probability-fill {
    height: 100%;
    background: linear-gradient(90deg, var(--accent), var(--accent-pink));
}

/* Metrics */
.metrics {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 12px;
}

.metric-label {
    font-family: var(--font-mono);
    font-size: 10px;
    letter-spacing: 0.15em;
    color: var(--text-dim);
    text-transform: uppercase;
}

.metric-value {
    font-size: 22px;
    font-weight: 700;
}

.feature-list {
    margin: 0;
    padding-left: 18px;
    color: var(--text-dim);
}

.scan-image {
    max-width: 100%;
    border-radius: 8px;
    border: 1px solid var(--border);
}

.heatmap {
    width: 100%;
    height: auto;
    display: block;
}

/* Empty state */
.empty-state {
    min-height: 50vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    gap: 12px;
}

.empty-icon {
    width: 64px;
    height: 64px;
    border-radius: 50%;
    background: var(--bg-panel);
    border: 1px solid var(--border);
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--text-muted);
}

.empty-state h3 {
    font-family: var(--font-mono);
    font-size: 20px;
    margin: 0;
}

.empty-state p {
    color: var(--text-dim);
    max-width: 380px;
}

.empty-actions {
    display: flex;
    gap: 16px;
    margin-top: 8px;
}

/* Buttons */
.btn {
    display: inline-block;
    padding: 10px 18px;
    border-radius: 8px;
    font-family: var(--font-mono);
    font-size: 12px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    text-decoration: none;
    border: 1px solid var(--border);
    color: var(--text-bright);
    background: var(--bg-raised);
}

.btn:hover {
    border-color: var(--accent);
    color: var(--accent);
}

.report-footer {
    margin-top: auto;
    border-top: 1px solid var(--border);
    padding: 16px 24px;
    font-family: var(--font-mono);
    font-size: 10px;
    color: var(--text-muted);
    text-align: center;
}

@media (max-width: 720px) {
    .report-grid {
        grid-template-columns: 1fr;
    }
    .metrics {
        grid-template-columns: 1fr;
    }
}

@media print {
    body {
        background: #ffffff;
        color: #000000;
    }
    .btn {
        display: none;
    }
}
"#;
