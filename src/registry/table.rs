//! Static extension table.
//!
//! Keys are either a dotted suffix (`.c`, `.rst.txt`) or a whole file name
//! prefixed with a dot (`.Dockerfile`, `.CMakeLists.txt`). Lookup is ASCII
//! case-insensitive and the first occurrence of a key wins, so more specific
//! spellings must come before generic ones.

pub(crate) static EXTENSIONS: &[(&str, &str)] = &[
    // Whole file names
    (".Dockerfile", "Dockerfile"),
    (".Containerfile", "Dockerfile"),
    (".Makefile", "Makefile"),
    (".GNUmakefile", "Makefile"),
    (".BSDmakefile", "Makefile"),
    (".CMakeLists.txt", "CMake"),
    (".meson.build", "Meson"),
    (".meson_options.txt", "Meson"),
    (".meson.options", "Meson"),
    (".Gemfile", "Ruby"),
    (".Rakefile", "Ruby"),
    (".Vagrantfile", "Ruby"),
    (".Podfile", "Ruby"),
    (".Brewfile", "Ruby"),
    (".Guardfile", "Ruby"),
    (".Fastfile", "Ruby"),
    (".Appfile", "Ruby"),
    (".Dangerfile", "Ruby"),
    (".Berksfile", "Ruby"),
    (".Capfile", "Ruby"),
    (".Jenkinsfile", "Groovy"),
    (".Tiltfile", "Starlark"),
    (".BUILD", "Bazel"),
    (".WORKSPACE", "Bazel"),
    (".MODULE.bazel", "Bazel"),
    (".BUCK", "Starlark"),
    (".Justfile", "Just"),
    (".Procfile", "Procfile"),
    (".Caddyfile", "Caddyfile"),
    (".Snakefile", "Snakemake"),
    (".PKGBUILD", "PKGBUILD"),
    (".APKBUILD", "PKGBUILD"),
    (".CODEOWNERS", "CODEOWNERS"),
    (".configure.ac", "Autoconf"),
    (".requirements.txt", "Pip Requirements"),
    (".constraints.txt", "Pip Requirements"),
    (".Pipfile", "TOML"),
    (".Cargo.lock", "TOML"),
    (".poetry.lock", "TOML"),
    (".uv.lock", "TOML"),
    (".Gemfile.lock", "Lock File"),
    (".Podfile.lock", "Lock File"),
    (".yarn.lock", "Lock File"),
    (".go.mod", "Go Module"),
    (".go.work", "Go Workspace"),
    (".go.sum", "Go Checksums"),
    (".SConstruct", "Python"),
    (".SConscript", "Python"),
    (".BUILD.gn", "GN Build"),
    (".Kconfig", "Kconfig"),
    (".Doxyfile", "Config"),
    (".nginx.conf", "NGINX Config"),
    (".httpd.conf", "Apache Config"),
    (".LICENSE", "Text"),
    (".COPYING", "Text"),
    (".AUTHORS", "Text"),
    (".CHANGELOG", "Text"),
    (".NEWS", "Text"),
    (".README", "Text"),
    (".TODO", "Text"),
    (".INSTALL", "Text"),
    // Dotfiles
    (".bashrc", "Shell"),
    (".bash_profile", "Shell"),
    (".bash_login", "Shell"),
    (".bash_logout", "Shell"),
    (".bash_aliases", "Shell"),
    (".profile", "Shell"),
    (".kshrc", "Shell"),
    (".mkshrc", "Shell"),
    (".envrc", "Shell"),
    (".xinitrc", "Shell"),
    (".xprofile", "Shell"),
    (".zshrc", "Zsh"),
    (".zprofile", "Zsh"),
    (".zshenv", "Zsh"),
    (".zlogin", "Zsh"),
    (".zlogout", "Zsh"),
    (".cshrc", "C Shell"),
    (".tcshrc", "C Shell"),
    (".login", "C Shell"),
    (".emacs", "Emacs Lisp"),
    (".spacemacs", "Emacs Lisp"),
    (".gitignore", "Git Ignore"),
    (".gitattributes", "Git Attributes"),
    (".gitmodules", "Git Config"),
    (".gitconfig", "Git Config"),
    (".dockerignore", "Docker Ignore"),
    (".npmignore", "Ignore List"),
    (".hgignore", "Ignore List"),
    (".eslintignore", "Ignore List"),
    (".prettierignore", "Ignore List"),
    (".stylelintignore", "Ignore List"),
    (".vscodeignore", "Ignore List"),
    (".gcloudignore", "Ignore List"),
    (".helmignore", "Ignore List"),
    (".slugignore", "Ignore List"),
    (".editorconfig", "EditorConfig"),
    (".inputrc", "Readline Config"),
    (".env", "Dotenv"),
    (".flaskenv", "Dotenv"),
    (".npmrc", "INI"),
    (".pypirc", "INI"),
    (".coveragerc", "INI"),
    (".pylintrc", "INI"),
    (".flake8", "INI"),
    (".htaccess", "Apache Config"),
    (".htpasswd", "Text"),
    (".yarnrc", "YAML"),
    (".condarc", "YAML"),
    (".clang-format", "YAML"),
    (".clang-tidy", "YAML"),
    (".yamllint", "YAML"),
    (".babelrc", "JSON with Comments"),
    (".eslintrc", "JSON with Comments"),
    (".jshintrc", "JSON with Comments"),
    (".swcrc", "JSON with Comments"),
    (".prettierrc", "JSON"),
    (".watchmanconfig", "JSON"),
    (".nvmrc", "Text"),
    (".node-version", "Text"),
    (".python-version", "Text"),
    (".ruby-version", "Text"),
    (".tool-versions", "Text"),
    (".mailmap", "Text"),
    // C and C++
    (".c", "C"),
    (".h", "C Header"),
    (".cats", "C"),
    (".idc", "C"),
    (".cpp", "C++"),
    (".cc", "C++"),
    (".cxx", "C++"),
    (".c++", "C++"),
    (".cp", "C++"),
    (".cppm", "C++"),
    (".ixx", "C++"),
    (".hpp", "C++ Header"),
    (".hh", "C++ Header"),
    (".hxx", "C++ Header"),
    (".h++", "C++ Header"),
    (".inl", "C++ Header"),
    (".ipp", "C++ Header"),
    (".tcc", "C++ Header"),
    (".tpp", "C++ Header"),
    (".txx", "C++ Header"),
    (".ino", "Arduino"),
    (".pde", "Processing"),
    (".m", "Objective-C"),
    (".mm", "Objective-C++"),
    (".cu", "CUDA"),
    (".cuh", "CUDA"),
    (".ispc", "ISPC"),
    (".c3", "C3"),
    // JVM
    (".java", "Java"),
    (".jav", "Java"),
    (".jsh", "Java"),
    (".gradle.kts", "Kotlin Script"),
    (".main.kts", "Kotlin Script"),
    (".kt", "Kotlin"),
    (".ktm", "Kotlin"),
    (".kts", "Kotlin Script"),
    (".gradle", "Gradle"),
    (".groovy", "Groovy"),
    (".gvy", "Groovy"),
    (".gy", "Groovy"),
    (".gsh", "Groovy"),
    (".scala", "Scala"),
    (".sc", "Scala"),
    (".sbt", "Scala"),
    (".ceylon", "Ceylon"),
    (".nf", "Nextflow"),
    // .NET
    (".cs", "C#"),
    (".csx", "C# Script"),
    (".cake", "C# Script"),
    (".fs", "F#"),
    (".fsi", "F#"),
    (".fsx", "F#"),
    // Systems languages
    (".rs.in", "Rust"),
    (".rs", "Rust"),
    (".go", "Go"),
    (".zig", "Zig"),
    (".zon", "Zig"),
    (".odin", "Odin"),
    (".d", "D"),
    (".di", "D"),
    (".jai", "Jai"),
    (".ha", "Hare"),
    (".jakt", "Jakt"),
    (".carbon", "Carbon"),
    (".vala", "Vala"),
    (".vapi", "Vala"),
    (".swift", "Swift"),
    (".dart", "Dart"),
    (".chpl", "Chapel"),
    (".pony", "Pony"),
    (".gleam", "Gleam"),
    (".kk", "Koka"),
    (".gr", "Grain"),
    (".mint", "Mint"),
    (".wren", "Wren"),
    (".nut", "Squirrel"),
    (".pike", "Pike"),
    (".pmod", "Pike"),
    (".pas", "Pascal"),
    (".pp", "Puppet"),
    (".dpr", "Delphi"),
    (".dpk", "Delphi"),
    (".lpr", "Pascal"),
    (".inc.pas", "Pascal"),
    // Web
    (".d.ts", "TypeScript Declaration"),
    (".d.mts", "TypeScript Declaration"),
    (".d.cts", "TypeScript Declaration"),
    (".js", "JavaScript"),
    (".mjs", "JavaScript"),
    (".cjs", "JavaScript"),
    (".es6", "JavaScript"),
    (".jsm", "JavaScript"),
    (".jsx", "JSX"),
    (".ts", "TypeScript"),
    (".mts", "TypeScript"),
    (".cts", "TypeScript"),
    (".tsx", "TSX"),
    (".as", "ActionScript"),
    (".hx", "Haxe"),
    (".hxsl", "Haxe"),
    (".re", "Reason"),
    (".rei", "Reason"),
    (".res", "ReScript"),
    (".resi", "ReScript"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".sass", "Sass"),
    (".less", "Less"),
    (".styl", "Stylus"),
    (".pcss", "PostCSS"),
    (".postcss", "PostCSS"),
    (".php", "PHP"),
    (".php3", "PHP"),
    (".php4", "PHP"),
    (".php5", "PHP"),
    (".phtml", "PHP"),
    (".phpt", "PHP"),
    (".hack", "Hack"),
    (".pug", "Pug"),
    (".jade", "Pug"),
    // Interface definitions and schemas
    (".proto", "Protocol Buffers"),
    (".thrift", "Thrift"),
    (".fbs", "FlatBuffers"),
    (".capnp", "Cap'n Proto"),
    (".avdl", "Avro IDL"),
    (".aidl", "AIDL"),
    (".idl", "IDL"),
    (".webidl", "WebIDL"),
    (".smithy", "Smithy"),
    (".prisma", "Prisma"),
    (".graphql", "GraphQL"),
    (".graphqls", "GraphQL"),
    (".gql", "GraphQL"),
    (".cue", "CUE"),
    (".kdl", "KDL"),
    (".jsonnet", "Jsonnet"),
    (".libsonnet", "Jsonnet"),
    (".dts", "Device Tree"),
    (".dtsi", "Device Tree"),
    (".p4", "P4"),
    // Smart contracts
    (".sol", "Solidity"),
    (".vy", "Vyper"),
    (".move", "Move"),
    (".cairo", "Cairo"),
    (".circom", "Circom"),
    (".nr", "Noir"),
    // Shaders and graphics
    (".glsl", "GLSL"),
    (".vert", "GLSL"),
    (".frag", "GLSL"),
    (".geom", "GLSL"),
    (".comp", "GLSL"),
    (".tesc", "GLSL"),
    (".tese", "GLSL"),
    (".hlsl", "HLSL"),
    (".fx", "HLSL"),
    (".fxh", "HLSL"),
    (".wgsl", "WGSL"),
    (".metal", "Metal"),
    (".shader", "ShaderLab"),
    (".cginc", "ShaderLab"),
    (".scad", "OpenSCAD"),
    (".asy", "Asymptote"),
    (".pov", "POV-Ray"),
    (".qml", "QML"),
    // Statistics and data science
    (".sas", "SAS"),
    (".stan", "Stan"),
    (".do", "Stata"),
    (".ado", "Stata"),
    (".kql", "Kusto"),
    (".csl", "Kusto"),
    (".pq", "Power Query"),
    // Misc C-like
    (".sp", "SourcePawn"),
    (".pwn", "Pawn"),
    (".mq4", "MQL4"),
    (".mq5", "MQL5"),
    (".mqh", "MQL5"),
    (".trigger", "Apex"),
    (".apex", "Apex"),
    (".bicep", "Bicep"),
    (".typ", "Typst"),
    (".qs", "Q#"),
    (".ld", "Linker Script"),
    (".lds", "Linker Script"),
    (".jsonc", "JSON with Comments"),
    (".code-workspace", "JSON with Comments"),
    (".json5", "JSON5"),
    // Python family
    (".py", "Python"),
    (".pyw", "Python"),
    (".pyi", "Python"),
    (".py3", "Python"),
    (".pyde", "Python"),
    (".pyx", "Cython"),
    (".pxd", "Cython"),
    (".pxi", "Cython"),
    (".rpy", "Ren'Py"),
    (".gyp", "GYP"),
    (".gypi", "GYP"),
    (".sage", "Sage"),
    (".smk", "Snakemake"),
    (".mojo", "Mojo"),
    (".gd", "GDScript"),
    (".bzl", "Starlark"),
    (".star", "Starlark"),
    (".bazel", "Bazel"),
    // Ruby family
    (".rb", "Ruby"),
    (".rbw", "Ruby"),
    (".rake", "Ruby"),
    (".gemspec", "Ruby"),
    (".ru", "Ruby"),
    (".podspec", "Ruby"),
    (".jbuilder", "Ruby"),
    (".thor", "Ruby"),
    (".cr", "Crystal"),
    // Perl family
    (".pl", "Perl"),
    (".pm", "Perl"),
    (".t", "Perl"),
    (".psgi", "Perl"),
    (".cgi", "Perl"),
    (".raku", "Raku"),
    (".rakumod", "Raku"),
    (".rakutest", "Raku"),
    (".p6", "Raku"),
    (".pm6", "Raku"),
    // Shells
    (".sh", "Shell"),
    (".bash", "Shell"),
    (".ksh", "Shell"),
    (".mksh", "Shell"),
    (".dash", "Shell"),
    (".ash", "Shell"),
    (".bats", "Shell"),
    (".command", "Shell"),
    (".zsh", "Zsh"),
    (".zsh-theme", "Zsh"),
    (".csh", "C Shell"),
    (".tcsh", "C Shell"),
    (".fish", "Fish"),
    (".nu", "Nushell"),
    (".ps1", "PowerShell"),
    (".psm1", "PowerShell"),
    (".psd1", "PowerShell"),
    (".ebuild", "Ebuild"),
    (".eclass", "Ebuild"),
    (".spec", "RPM Spec"),
    (".just", "Just"),
    (".justfile", "Just"),
    // Scripting with hash comments
    (".tcl", "Tcl"),
    (".tk", "Tcl"),
    (".itcl", "Tcl"),
    (".sdc", "Tcl"),
    (".xdc", "Tcl"),
    (".qsf", "Tcl"),
    (".exp", "Expect"),
    (".awk", "AWK"),
    (".gawk", "AWK"),
    (".mawk", "AWK"),
    (".nawk", "AWK"),
    (".sed", "Sed"),
    (".nim", "Nim"),
    (".nims", "Nim"),
    (".nimble", "Nim"),
    (".ex", "Elixir"),
    (".exs", "Elixir"),
    (".coffee", "CoffeeScript"),
    (".cson", "CoffeeScript"),
    (".litcoffee", "CoffeeScript"),
    (".r", "R Script"),
    (".rprofile", "R Script"),
    (".jl", "Julia"),
    (".janet", "Janet"),
    (".roc", "Roc"),
    (".smali", "Smali"),
    (".robot", "Robot Framework"),
    (".resource", "Robot Framework"),
    (".feature", "Gherkin"),
    (".wdl", "WDL"),
    (".cwl", "CWL"),
    (".gp", "Gnuplot"),
    (".gnuplot", "Gnuplot"),
    (".plt", "Gnuplot"),
    // Build and configuration with hash comments
    (".cmake.in", "CMake"),
    (".cmake", "CMake"),
    (".mk", "Makefile"),
    (".mak", "Makefile"),
    (".make", "Makefile"),
    (".dockerfile", "Dockerfile"),
    (".containerfile", "Dockerfile"),
    (".ninja", "Ninja"),
    (".gn", "GN Build"),
    (".gni", "GN Build"),
    (".ac", "Autoconf"),
    (".am", "Automake"),
    (".pro", "QMake"),
    (".pri", "QMake"),
    (".prf", "QMake"),
    (".pkr.hcl", "Packer"),
    (".hcl", "HCL"),
    (".nomad", "HCL"),
    (".tf", "Terraform"),
    (".tfvars", "Terraform"),
    (".tftpl", "Terraform"),
    (".nix", "Nix"),
    (".sls", "SaltStack"),
    (".yaml", "YAML"),
    (".yml", "YAML"),
    (".toml", "TOML"),
    (".conf", "Config"),
    (".cfg", "Config"),
    (".cnf", "Config"),
    (".rc", "Config"),
    (".nginxconf", "NGINX Config"),
    (".vhost", "NGINX Config"),
    (".properties", "Java Properties"),
    (".prop", "Java Properties"),
    (".desktop", "Desktop Entry"),
    (".service", "Systemd Unit"),
    (".socket", "Systemd Unit"),
    (".timer", "Systemd Unit"),
    (".mount", "Systemd Unit"),
    (".pbtxt", "Protocol Buffer Text"),
    (".textproto", "Protocol Buffer Text"),
    (".txtpb", "Protocol Buffer Text"),
    (".po", "Gettext Catalog"),
    (".pot", "Gettext Catalog"),
    // SQL dialects
    (".sql", "SQL"),
    (".ddl", "SQL"),
    (".dml", "SQL"),
    (".udf", "SQL"),
    (".psql", "PostgreSQL"),
    (".pgsql", "PostgreSQL"),
    (".mysql", "MySQL"),
    (".plsql", "PL/SQL"),
    (".pls", "PL/SQL"),
    (".pks", "PL/SQL"),
    (".pkb", "PL/SQL"),
    (".pck", "PL/SQL"),
    (".tsql", "T-SQL"),
    (".hql", "HiveQL"),
    (".cql", "CQL"),
    // Double-dash comment languages
    (".lua", "Lua"),
    (".luau", "Luau"),
    (".rockspec", "Lua"),
    (".tl", "Teal"),
    (".moon", "MoonScript"),
    (".nelua", "Nelua"),
    (".hs", "Haskell"),
    (".hsc", "Haskell"),
    (".hs-boot", "Haskell"),
    (".lhs", "Literate Haskell"),
    (".cabal", "Cabal"),
    (".elm", "Elm"),
    (".purs", "PureScript"),
    (".idr", "Idris"),
    (".lidr", "Idris"),
    (".agda", "Agda"),
    (".lean", "Lean"),
    (".curry", "Curry"),
    (".fut", "Futhark"),
    (".dhall", "Dhall"),
    (".ada", "Ada"),
    (".adb", "Ada"),
    (".ads", "Ada"),
    (".gpr", "Ada"),
    (".vhd", "VHDL"),
    (".vhdl", "VHDL"),
    (".applescript", "AppleScript"),
    (".e", "Eiffel"),
    // Hardware description (C-like)
    (".v", "Verilog"),
    (".vh", "Verilog"),
    (".sv", "SystemVerilog"),
    (".svh", "SystemVerilog"),
    // Semicolon comment languages
    (".lisp", "Common Lisp"),
    (".lsp", "Common Lisp"),
    (".cl", "Common Lisp"),
    (".asd", "Common Lisp"),
    (".el", "Emacs Lisp"),
    (".lfe", "Lisp Flavored Erlang"),
    (".scm", "Scheme"),
    (".ss", "Scheme"),
    (".sld", "Scheme"),
    (".sps", "Scheme"),
    (".rkt", "Racket"),
    (".rktl", "Racket"),
    (".rktd", "Racket"),
    (".scrbl", "Racket"),
    (".clj", "Clojure"),
    (".cljs", "ClojureScript"),
    (".cljc", "Clojure"),
    (".bb", "Clojure"),
    (".edn", "EDN"),
    (".fnl", "Fennel"),
    (".asm", "Assembly"),
    (".s", "Assembly"),
    (".nasm", "Assembly"),
    (".masm", "Assembly"),
    (".a51", "Assembly"),
    (".z80", "Assembly"),
    (".ini", "INI"),
    (".reg", "Windows Registry"),
    (".ahk", "AutoHotkey"),
    (".ahkl", "AutoHotkey"),
    (".au3", "AutoIt"),
    (".zone", "DNS Zone"),
    (".ll", "LLVM IR"),
    (".wat", "WebAssembly Text"),
    (".wast", "WebAssembly Text"),
    (".gcode", "G-code"),
    (".gco", "G-code"),
    (".iss", "Inno Setup"),
    (".nsi", "NSIS"),
    (".nsh", "NSIS"),
    // Percent comment languages
    (".tex", "TeX"),
    (".sty", "TeX"),
    (".cls", "TeX"),
    (".dtx", "TeX"),
    (".ins", "TeX"),
    (".ltx", "LaTeX"),
    (".latex", "LaTeX"),
    (".bib", "BibTeX"),
    (".bbx", "BibTeX"),
    (".cbx", "BibTeX"),
    (".app.src", "Erlang"),
    (".erl", "Erlang"),
    (".hrl", "Erlang"),
    (".escript", "Erlang"),
    (".yrl", "Erlang"),
    (".xrl", "Erlang"),
    (".prolog", "Prolog"),
    (".ps", "PostScript"),
    (".eps", "PostScript"),
    (".mf", "Metafont"),
    (".mp", "MetaPost"),
    (".ly", "LilyPond"),
    (".ily", "LilyPond"),
    (".matlab", "MATLAB"),
    // Markup with XML-style comments
    (".vcxproj.filters", "MSBuild"),
    (".html.erb", "HTML+ERB"),
    (".xml", "XML"),
    (".xsd", "XML Schema"),
    (".xsl", "XSLT"),
    (".xslt", "XSLT"),
    (".svg", "SVG"),
    (".html", "HTML"),
    (".htm", "HTML"),
    (".shtml", "HTML"),
    (".xht", "XHTML"),
    (".xhtml", "XHTML"),
    (".plist", "XML Property List"),
    (".resx", "XML"),
    (".wsdl", "XML"),
    (".rss", "XML"),
    (".atom", "XML"),
    (".kml", "XML"),
    (".gpx", "XML"),
    (".dae", "XML"),
    (".glade", "XML"),
    (".ui", "XML"),
    (".storyboard", "XML"),
    (".xib", "XML"),
    (".jelly", "XML"),
    (".pom", "XML"),
    (".tld", "XML"),
    (".nuspec", "XML"),
    (".ps1xml", "XML"),
    (".wxs", "WiX XML"),
    (".wxi", "WiX XML"),
    (".wxl", "WiX XML"),
    (".xlf", "XLIFF"),
    (".xliff", "XLIFF"),
    (".mxml", "MXML"),
    (".xaml", "XAML"),
    (".axaml", "XAML"),
    (".csproj", "MSBuild"),
    (".vbproj", "MSBuild"),
    (".fsproj", "MSBuild"),
    (".vcxproj", "MSBuild"),
    (".props", "MSBuild"),
    (".targets", "MSBuild"),
    (".vue", "Vue"),
    (".svelte", "Svelte"),
    (".md", "Markdown"),
    (".markdown", "Markdown"),
    (".mdown", "Markdown"),
    (".mkd", "Markdown"),
    (".mkdn", "Markdown"),
    (".rmd", "R Markdown"),
    (".qmd", "Quarto Markdown"),
    (".mdx", "MDX"),
    (".cfm", "ColdFusion"),
    (".cfc", "ColdFusion"),
    (".aspx", "ASP.NET"),
    (".ascx", "ASP.NET"),
    (".asmx", "ASP.NET"),
    // No comment syntax
    (".json", "JSON"),
    (".geojson", "GeoJSON"),
    (".topojson", "TopoJSON"),
    (".jsonl", "JSON Lines"),
    (".ndjson", "JSON Lines"),
    (".webmanifest", "JSON"),
    (".har", "JSON"),
    (".avsc", "JSON"),
    (".ipynb", "Jupyter Notebook"),
    (".rst.txt", "reStructuredText"),
    (".rst", "reStructuredText"),
    (".rest", "reStructuredText"),
    (".txt", "Text"),
    (".text", "Text"),
    (".srt", "SubRip Text"),
    (".vtt", "WebVTT"),
    (".adoc", "AsciiDoc"),
    (".asciidoc", "AsciiDoc"),
    (".org", "Org"),
    (".csv", "CSV"),
    (".tsv", "TSV"),
    (".diff", "Diff"),
    (".patch", "Diff"),
    (".bat", "Batch"),
    (".cmd", "Batch"),
    (".vb", "Visual Basic"),
    (".bas", "Visual Basic"),
    (".vbs", "VBScript"),
    (".f", "Fortran"),
    (".for", "Fortran"),
    (".ftn", "Fortran"),
    (".f77", "Fortran"),
    (".f90", "Fortran"),
    (".f95", "Fortran"),
    (".f03", "Fortran"),
    (".f08", "Fortran"),
    (".f18", "Fortran"),
    (".cob", "COBOL"),
    (".cbl", "COBOL"),
    (".cobol", "COBOL"),
    (".cpy", "COBOL"),
    (".bf", "Brainfuck"),
];
