use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Lxwyer Up" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  // Scales of justice
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#0F2944"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-scale"
                  {
                      path d="M7 20h10" {}
                      path d="M12 3v17" {}
                      path d="M5 7h14" {}
                      path d="M2 16l3 -9l3 9a4 4 0 0 1 -6 0" {}
                      path d="M16 16l3 -9l3 9a4 4 0 0 1 -6 0" {}
                  }
                  h3 { a href="/" { "Lxwyer Up" } }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/lawyers" { "Find a Lawyer" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}
