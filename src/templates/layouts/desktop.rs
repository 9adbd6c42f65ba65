use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLES) }
            }
            body {
                header {
                    div {
                        h1 { "Mondus" }
                        p class="sub" { "Owner's DB PDF Mapping" }
                    }
                }
                (content)
                footer {
                    p { "© VortexWeb" }
                }
            }
        }
    }
}

const STYLES: &str = "\
body { font-family: Arial, Helvetica, sans-serif; background: #f9fafb; color: #374151; margin: 0; }
header, main, footer { max-width: 80vw; margin: 0 auto; padding: 1rem 1.5rem; }
header h1 { margin: 0; font-size: 1.5rem; color: #111827; }
header .sub { margin: 0; font-size: 0.875rem; color: #6b7280; }
main .panel { background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 1.5rem; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; text-align: left; }
th { text-transform: uppercase; font-size: 0.75rem; background: #f9fafb; }
th, td { padding: 0.75rem 1rem; border-bottom: 1px solid #e5e7eb; }
tr:hover td { background: #f9fafb; }
.pagination { margin-top: 1rem; display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem; }
.page-btn { padding: 0.25rem 0.75rem; border: 1px solid #d1d5db; border-radius: 6px; background: white; color: #374151; text-decoration: none; }
.page-btn.disabled { color: #9ca3af; pointer-events: none; }
.badge { padding: 0.125rem 0.5rem; border-radius: 6px; }
.badge.vacant { color: #16a34a; background: #dcfce7; }
.badge.rented { color: #dc2626; background: #fee2e2; }
.notice { padding: 0.5rem 1rem; border-radius: 6px; margin-bottom: 1rem; font-size: 0.875rem; }
.notice.success { background: #dcfce7; color: #166534; }
.notice.error { background: #fee2e2; color: #991b1b; }
.actions form { display: inline; margin: 0; }
.actions button, .actions a { font-size: 0.875rem; margin-left: 0.5rem; }
footer { text-align: center; font-size: 0.875rem; color: #6b7280; }
";
