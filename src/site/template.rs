//! Handlebars sources for the page. Values are HTML-escaped by the registry.

pub const NAV_PARTIAL: &str = r##"<nav class="section-nav">{{#if prev}}<a href="#{{prev}}" rel="prev">&uarr;</a>{{/if}}{{#if next}}<a href="#{{next}}" rel="next">&darr;</a>{{/if}}</nav>"##;

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{handle}}</title>
</head>
<body>
<section id="intro">
<h2 class="section-title">Intro</h2>
<header><h1>Hi,<br>I&rsquo;m <span class="name">{{handle}}</span></h1><p class="description">{{description}}</p></header>
<aside class="stats"><h2><a href="{{stats_source}}">testaustime</a> statistics</h2>{{#each stats}}<p>{{label}}: {{formatted}}</p>{{/each}}</aside>
{{#with intro_nav}}{{> nav}}{{/with}}
</section>
<section id="projects">
<h2 class="section-title">Projects</h2>
{{#each projects}}
{{#if link}}<a href="{{link}}">{{/if}}<article class="card"><h3>{{title}}</h3><p>{{description}}</p></article>{{#if link}}</a>{{/if}}
{{/each}}
{{#with projects_nav}}{{> nav}}{{/with}}
</section>
<section id="skills">
<h2 class="section-title">Skills</h2>
{{#each skills}}
<article class="card"><h3>{{title}}</h3><p>{{description}}</p></article>
{{/each}}
{{#with skills_nav}}{{> nav}}{{/with}}
</section>
<footer>
<div class="contact">{{#if github}}<a href="{{github}}">GitHub</a>{{/if}}{{#if mailto}}<a href="{{mailto}}">Mail</a>{{/if}}</div>
<p class="copyright">&copy; {{year}} {{handle}}</p>
</footer>
</body>
</html>
"#;
