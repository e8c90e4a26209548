/// A named, pre-authored starter tree plus the metadata needed to finish
/// setting it up after the copy.
#[derive(Debug)]
pub struct Template {
    /// Display name shown in the interactive selection.
    pub name: &'static str,
    /// Identifier used by `--template` and as the directory name under the
    /// templates root.
    pub value: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Manifest file rewritten with the project name. [`None`] for
    /// manifest-less runtimes.
    pub manifest: Option<&'static str>,
    /// Next-step shell commands with `{project}` and `{pm}` placeholders.
    pub steps: &'static [&'static str],
    /// Tera narrative for the generated README. Variables: `project`,
    /// `install`, `run`.
    pub readme: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "Node.js",
        value: "nodejs",
        description: "plain Node.js with npm scripts",
        icon: "⬢",
        manifest: Some("package.json"),
        steps: &["cd {project}", "{pm} install", "{pm} run dev"],
        readme: NODEJS_README,
    },
    Template {
        name: "TypeScript",
        value: "typescript",
        description: "Node.js with TypeScript and tsx",
        icon: "🔷",
        manifest: Some("package.json"),
        steps: &["cd {project}", "{pm} install", "{pm} run dev"],
        readme: TYPESCRIPT_README,
    },
    Template {
        name: "Bun",
        value: "bun",
        description: "Bun runtime, TypeScript out of the box",
        icon: "🥟",
        manifest: Some("package.json"),
        steps: &["cd {project}", "bun install", "bun run dev"],
        readme: BUN_README,
    },
    Template {
        name: "Deno",
        value: "deno",
        description: "Deno runtime, no install step",
        icon: "🦕",
        manifest: None,
        steps: &["cd {project}", "deno task dev"],
        readme: DENO_README,
    },
];

const NODEJS_README: &str = "\
# {{ project }}

A minimal Node.js starter.

## Getting started

```sh
{{ install }}
{{ run }}
```

The entry point is `index.js`. Edit it and the dev script reloads on save.
";

const TYPESCRIPT_README: &str = "\
# {{ project }}

A minimal Node.js + TypeScript starter.

## Getting started

```sh
{{ install }}
{{ run }}
```

Sources live under `src/`. `tsconfig.json` ships with strict mode enabled.
";

const BUN_README: &str = "\
# {{ project }}

A minimal Bun starter.

## Getting started

```sh
bun install
bun run dev
```

The entry point is `index.ts`. Bun runs TypeScript directly.
";

const DENO_README: &str = "\
# {{ project }}

A minimal Deno starter. There is no install step: dependencies are fetched
and cached on first run.

## Getting started

```sh
deno task dev
```

Tasks are defined in `deno.json`.
";
