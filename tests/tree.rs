use pathtrie::{MatchError, Trie};

use std::sync::Arc;
use std::thread;

macro_rules! match_tests {
    ($($name:ident {
        routes = $routes:expr,
        $( $path:literal =>
            $( $(@$none:tt)? None )?
            $( $(@$some:tt)? [ $( $route:literal { $( $key:literal => $val:literal ),* $(,)? } ),* $(,)? ] )?
        ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let mut trie = Trie::new();

            for route in $routes {
                trie.insert(route, route);
            }

            $(match trie.lookup($path) {
                Err(err) => {
                    assert_eq!(err, MatchError::NotFound);
                    $($( @$some )?
                        panic!("Expected value for path '{}'", $path)
                    )?
                }
                Ok(matches) => {
                    $($( @$some )?
                        let expected: Vec<(&str, Option<Vec<(&str, &str)>>)> = vec![$({
                            let params: Vec<(&str, &str)> = vec![$(($key, $val)),*];
                            ($route, if params.is_empty() { None } else { Some(params) })
                        }),*];

                        let got = matches
                            .iter()
                            .map(|m| (*m.value, m.params.as_ref().map(|p| p.iter().collect::<Vec<_>>())))
                            .collect::<Vec<_>>();

                        assert_eq!(got, expected, "Wrong matches for path '{}'", $path);
                    )?

                    $($( @$none )?
                        panic!(
                            "Unexpected value for path '{}', got: {:?}",
                            $path,
                            matches.iter().map(|m| *m.value).collect::<Vec<_>>()
                        );
                    )?
                }
            })*
        }
   )* };
}

match_tests! {
    static_paths {
        routes = ["/", "/users/dashboard"],
        "/"                => ["/" {}],
        "/users/dashboard" => ["/users/dashboard" {}],
        "/not/found"       => None,
        "/users"           => None,
        ""                 => None,
    },
    param_paths {
        routes = ["/:id", "/:id/:org"],
        "/1"                => ["/:id" { "id" => "1" }],
        "/1/abc"            => ["/:id/:org" { "id" => "1", "org" => "abc" }],
        "/not/found/nested" => None,
        "/"                 => None,
    },
    mixed_static_params {
        routes = ["/users/:id/admin/:org", "/users/:id/dashboard", "/users/:id"],
        "/users/1/admin/4"   => ["/users/:id/admin/:org" { "id" => "1", "org" => "4" }],
        "/users/1/dashboard" => ["/users/:id/dashboard" { "id" => "1" }],
        "/users/1"           => ["/users/:id" { "id" => "1" }],
        "/users/not/found"   => None,
        "/users/"            => None,
    },
    wildcard_paths {
        routes = ["/*wildcard"],
        "/anything/even/deeply/nested" => ["/*wildcard" { "wildcard" => "anything/even/deeply/nested" }],
        "/a"                           => ["/*wildcard" { "wildcard" => "a" }],
        "/"                            => None,
    },
    mixed_static_wildcard {
        routes = ["/users/*wildcard", "/users/assets/*wildcard"],
        "/users/1"                    => ["/users/*wildcard" { "wildcard" => "1" }],
        "/users/some/other"           => ["/users/*wildcard" { "wildcard" => "some/other" }],
        "/users/assets/profile"       => ["/users/assets/*wildcard" { "wildcard" => "profile" }],
        "/users/assets/deeply/nested" => ["/users/assets/*wildcard" { "wildcard" => "deeply/nested" }],
        "/users/assets"               => ["/users/*wildcard" { "wildcard" => "assets" }],
        "/users/assets/"              => ["/users/*wildcard" { "wildcard" => "assets/" }],
    },
    mixed_param_wildcard {
        routes = ["/:id/*wildcard"],
        "/1/assets/tag"               => ["/:id/*wildcard" { "id" => "1", "wildcard" => "assets/tag" }],
        "/1/assets/deeply/nested/tag" => ["/:id/*wildcard" { "id" => "1", "wildcard" => "assets/deeply/nested/tag" }],
        "/unavailable"                => None,
        "/1/"                         => None,
    },
    mixed_static_param_wildcard {
        routes = [
            "/users/dashboard/admin/overview",
            "/users/:id/admin/:org",
            "/users/*wildcard",
            "/users/:id/metadata/*wildcard",
        ],
        "/users/dashboard/admin/overview"       => ["/users/dashboard/admin/overview" {}],
        "/users/1/admin/4"                      => ["/users/:id/admin/:org" { "id" => "1", "org" => "4" }],
        "/users/not/found"                      => ["/users/*wildcard" { "wildcard" => "not/found" }],
        "/users/1/metadata/availability/monday" => ["/users/:id/metadata/*wildcard" { "id" => "1", "wildcard" => "availability/monday" }],
        "/users/dashboard/customer/overview"    => ["/users/*wildcard" { "wildcard" => "dashboard/customer/overview" }],
        "/users/4/admin"                        => ["/users/*wildcard" { "wildcard" => "4/admin" }],
        "/users/dashboard/admin/4"              => ["/users/:id/admin/:org" { "id" => "dashboard", "org" => "4" }],
    },
    shared_shape {
        routes = ["/:id/:org", "/:name/:surname"],
        "/1/abc" => [
            "/:id/:org" { "id" => "1", "org" => "abc" },
            "/:name/:surname" { "name" => "1", "surname" => "abc" },
        ],
        "/1" => None,
    },
    duplicates {
        routes = ["/", "/", "/:id", "/:id"],
        "/"  => ["/" {}, "/" {}],
        "/x" => ["/:id" { "id" => "x" }, "/:id" { "id" => "x" }],
    },
    priority {
        routes = ["/users/:id", "/users/dashboard", "/users/*rest"],
        "/users/dashboard"   => ["/users/dashboard" {}],
        "/users/42"          => ["/users/:id" { "id" => "42" }],
        "/users/42/settings" => ["/users/*rest" { "rest" => "42/settings" }],
    },
    backtracking {
        routes = [
            "/",
            "/cmd/:tool/",
            "/cmd/:tool/:sub",
            "/cmd/whoami",
            "/cmd/whoami/root",
            "/cmd/whoami/root/",
            "/src/*filepath",
            "/search/",
            "/search/:query",
            "/search/actix-web",
            "/search/google",
            "/files/:dir/*filepath",
            "/doc/",
            "/doc/rust_faq.html",
            "/info/:user/public",
            "/info/:user/project/:project",
            "/info/:user/project/rustlang",
            "/:cc",
            "/:cc/cc",
            "/:cc/:dd/ee",
            "/c1/:dd/e",
            "/c1/:dd/e1",
            "/get/abc",
            "/get/:param",
            "/get/abc/:param/test",
            "/get/abc/123abd/:param",
        ],
        "/"                              => ["/" {}],
        "/cmd/test"                      => None,
        "/cmd/test/"                     => ["/cmd/:tool/" { "tool" => "test" }],
        "/cmd/test/3"                    => ["/cmd/:tool/:sub" { "tool" => "test", "sub" => "3" }],
        "/cmd/whoami"                    => ["/cmd/whoami" {}],
        "/cmd/whoami/"                   => ["/cmd/:tool/" { "tool" => "whoami" }],
        "/cmd/whoami/r"                  => ["/cmd/:tool/:sub" { "tool" => "whoami", "sub" => "r" }],
        "/cmd/whoami/root"               => ["/cmd/whoami/root" {}],
        "/cmd/whoami/root/"              => ["/cmd/whoami/root/" {}],
        "/src/"                          => None,
        "/src/some/file.png"             => ["/src/*filepath" { "filepath" => "some/file.png" }],
        "/search/"                       => ["/search/" {}],
        "/search/actix"                  => ["/search/:query" { "query" => "actix" }],
        "/search/actix-web"              => ["/search/actix-web" {}],
        "/search/someth!ng+in+ünìcodé"   => ["/search/:query" { "query" => "someth!ng+in+ünìcodé" }],
        "/search/someth!ng+in+ünìcodé/"  => None,
        "/files/js/inc/framework.js"     => ["/files/:dir/*filepath" { "dir" => "js", "filepath" => "inc/framework.js" }],
        "/doc/rust_faq.html"             => ["/doc/rust_faq.html" {}],
        "/info/gordon/public"            => ["/info/:user/public" { "user" => "gordon" }],
        "/info/gordon/project/rust"      => ["/info/:user/project/:project" { "user" => "gordon", "project" => "rust" }],
        "/info/gordon/project/rustlang"  => ["/info/:user/project/rustlang" { "user" => "gordon" }],
        "/a"                             => ["/:cc" { "cc" => "a" }],
        "/all/cc"                        => ["/:cc/cc" { "cc" => "all" }],
        "/c1/d/e"                        => ["/c1/:dd/e" { "dd" => "d" }],
        "/c1/d/e1"                       => ["/c1/:dd/e1" { "dd" => "d" }],
        "/c1/d/ee"                       => ["/:cc/:dd/ee" { "cc" => "c1", "dd" => "d" }],
        "/c/d/ee"                        => ["/:cc/:dd/ee" { "cc" => "c", "dd" => "d" }],
        "/get/abc"                       => ["/get/abc" {}],
        "/get/a"                         => ["/get/:param" { "param" => "a" }],
        "/get/abc/12/test"               => ["/get/abc/:param/test" { "param" => "12" }],
        "/get/abc/123abd/test"           => ["/get/abc/123abd/:param" { "param" => "test" }],
        "/get/abc/123abd/other"          => ["/get/abc/123abd/:param" { "param" => "other" }],
        "/get/abc/x/nope"                => None,
    },
}

#[test]
fn wildcard_segments_after_name_ignored() {
    let mut trie = Trie::new();
    trie.insert("/*w/ignored/:x", "w");

    let matches = trie.lookup("/a/b/c").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0].value, "w");
    assert_eq!(matches[0].param("w"), Some("a/b/c"));
    assert_eq!(matches[0].param("x"), None);
}

#[test]
fn unregistered_root_literal() {
    let mut trie = Trie::new();
    trie.insert("/users", ());

    assert_eq!(trie.lookup("/groups"), Err(MatchError::NotFound));
    assert_eq!(MatchError::NotFound.to_string(), "matching route not found");
}

#[test]
fn owned_values() {
    let mut trie = Trie::new();
    trie.insert(String::from("/users/:id"), vec![1, 2, 3]);

    let matches = trie.lookup("/users/7").unwrap();
    assert_eq!(matches[0].value, &vec![1, 2, 3]);
    assert_eq!(matches[0].param("id"), Some("7"));
}

#[test]
fn concurrent_lookups() {
    let mut trie = Trie::new();
    trie.insert("/users/:id", 1);
    trie.insert("/users/dashboard", 2);
    trie.insert("/files/*path", 3);

    let trie = Arc::new(trie);
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                for _ in 0..100 {
                    let id = i.to_string();
                    let path = format!("/users/{}", id);
                    let matches = trie.lookup(&path).unwrap();
                    assert_eq!(*matches[0].value, 1);
                    assert_eq!(matches[0].param("id"), Some(id.as_str()));

                    assert_eq!(*trie.lookup("/users/dashboard").unwrap()[0].value, 2);
                    assert_eq!(trie.lookup("/files/a/b").unwrap()[0].param("path"), Some("a/b"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
