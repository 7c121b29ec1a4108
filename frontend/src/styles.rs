//! Widget stylesheets.
//!
//! Mounted once by [`App`](crate::App) through `leptos_meta::Style`; nothing
//! is injected at render time.

/// Drop-zone, file info panel, submit button and loading overlay.
pub const UPLOAD_CSS: &str = r#"
.file-upload-area {
    border: 2px dashed #667eea;
    border-radius: 12px;
    padding: 40px 20px;
    text-align: center;
    cursor: pointer;
    transition: background 0.2s, border-color 0.2s;
}

.file-upload-area.dragover {
    background: rgba(102, 126, 234, 0.08);
    border-color: #764ba2;
}

.file-upload-area input[type="file"] {
    display: none;
}

.file-info {
    border: 1px solid #e0e6ed;
    border-radius: 12px;
    padding: 16px 20px;
}

.file-info .file-details {
    display: flex;
    align-items: center;
    gap: 12px;
}

.file-info .remove-file {
    margin-left: auto;
    background: none;
    border: none;
    font-size: 20px;
    cursor: pointer;
    color: #e74c3c;
}

.submit-btn {
    margin-top: 20px;
    width: 100%;
    padding: 14px;
    border: none;
    border-radius: 8px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    font-size: 1rem;
    cursor: pointer;
}

.submit-btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.loading-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    align-items: center;
    justify-content: center;
    flex-direction: column;
    color: white;
    z-index: 900;
}

.loading-overlay .spinner {
    width: 48px;
    height: 48px;
    border: 4px solid rgba(255, 255, 255, 0.3);
    border-top-color: white;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;

/// Top-right banner stack.
pub const NOTIFICATION_CSS: &str = r#"
.notification-stack {
    position: fixed;
    top: 20px;
    right: 20px;
    display: flex;
    flex-direction: column;
    gap: 10px;
    z-index: 1000;
    pointer-events: none;
}

.notification {
    color: white;
    padding: 15px 20px;
    border-radius: 8px;
    font-weight: 500;
    transform: translateX(120%);
    transition: transform 0.3s ease;
    pointer-events: auto;
}

.notification.visible {
    transform: translateX(0);
}

.notification.error-message {
    background: #e74c3c;
    box-shadow: 0 4px 12px rgba(231, 76, 60, 0.3);
}

.notification.success-message {
    background: #27ae60;
    box-shadow: 0 4px 12px rgba(39, 174, 96, 0.3);
}
"#;

/// Analysis result modal.
pub const RESULTS_CSS: &str = r#"
.results-section {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
    padding: 20px;
    animation: fadeIn 0.3s ease;
}

.results-card {
    background: white;
    border-radius: 20px;
    max-width: 800px;
    max-height: 80vh;
    width: 100%;
    overflow: hidden;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
}

.results-header {
    background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%);
    color: white;
    padding: 20px 30px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.results-header h2 {
    margin: 0;
    font-size: 1.5rem;
}

.results-header .received-at {
    font-size: 0.85rem;
    opacity: 0.85;
}

.close-results {
    background: rgba(255, 255, 255, 0.2);
    border: none;
    color: white;
    width: 35px;
    height: 35px;
    border-radius: 50%;
    font-size: 20px;
    cursor: pointer;
    transition: background 0.2s;
}

.close-results:hover {
    background: rgba(255, 255, 255, 0.3);
}

.results-content {
    padding: 30px;
    max-height: 60vh;
    overflow-y: auto;
}

.analysis-text {
    line-height: 1.8;
    font-size: 1rem;
    color: #2c3e50;
}

.results-actions {
    padding: 20px 30px;
    border-top: 1px solid #eee;
    text-align: center;
}

.analyze-another {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    padding: 12px 24px;
    border-radius: 8px;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 0.2s;
}

.analyze-another:hover {
    transform: translateY(-2px);
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;
