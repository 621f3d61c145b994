//! Scaffolding for new groups.
//!
//! Writes a fully commented starting layout: group-level header/footer
//! fragments plus one `box.<name>/` directory per container with template
//! fragments and lifecycle scripts. Everything except the header `version`
//! and `services` keys is commented out, so a freshly scaffolded group
//! assembles to a valid, empty compose file.

use boxer::error::{Error, Result};
use boxer::group::{Group, BOX_PREFIX};
use std::fs;

const BUILD_HEADER: &str = "\
# Header of the generated \"docker-compose.build.yml\" file (`boxer build`).
# Keep the indentation of the lines below intact.

version: '3.1'

services:
";

const BUILD_FOOTER: &str = "\
# Footer of the generated \"docker-compose.build.yml\" file (`boxer build`).
# A good place for shared volumes used during the build stage.

";

const RUN_HEADER: &str = "\
# Header of the generated \"docker-compose.run.yml\" file (`boxer start`).
# Keep the indentation of the lines below intact.

version: '3.1'

services:
";

const RUN_FOOTER: &str = "\
# Footer of the generated \"docker-compose.run.yml\" file (`boxer start`).
# A good place for shared volumes used by the running containers, e.g.:
#
#volumes:
#  shared_data:

";

fn build_yml(name: &str) -> String {
    format!(
        "\
# One \"service\" block of the generated \"docker-compose.build.yml\" file,
# picked up by `boxer build`. The build context of container \"{name}\" is
# the ./box.{name} folder; extra files placed there are available while the
# image is built. Uncomment and adjust:
#
#  {name}:
#    container_name: build_{name}_1
#    build:
#      context: ./box.{name}
#    command: >
#      sh -c \"sleep 10000\"
#    env_file:
#      - ./box.{name}/{name}.env
#    depends_on:
#      - another_container
"
    )
}

fn run_yml(name: &str) -> String {
    format!(
        "\
# One \"service\" block of the generated \"docker-compose.run.yml\" file,
# picked up by `boxer start`. Uncomment and adjust:
#
#  {name}:
#    image: base-image:version
#    command: >
#      sh -c \"cd /app && ./run.sh\"
#    env_file:
#      - ./box.{name}/{name}.env
#    volumes:
#      - shared_data:/shared_data
#    depends_on:
#      - another_container
"
    )
}

fn checkout_sh(name: &str) -> String {
    format!(
        "\
#!/bin/bash
#
# Runs during `boxer build` before the build environment is brought up.
# Use it to refresh the sources of container \"{name}\", e.g.:
#
#if [ ! -d \"./app\" ]; then
#    git clone https://example.com/my-app.git ./app
#fi
"
    )
}

fn exec_sh(name: &str) -> String {
    format!(
        "\
#!/bin/bash
#
# Runs during `boxer build` after the build environment is up. Use it for
# one-off steps whose results should end up in the cached images, e.g.
# database migrations. To control ordering across containers, rename this
# file to exec-1.sh in the first container, exec-2.sh in the second, and
# so on.
#
# docker exec -i build_{name}_1 sh -c 'cd /app && ./migrate.sh'
"
    )
}

fn commit_sh(name: &str) -> String {
    format!(
        "\
#!/bin/bash
#
# Runs during `boxer build` to commit the changes made to container
# \"{name}\" into a new image:
#
# docker commit build_{name}_1 my-image-{name}
"
    )
}

fn push_sh(name: &str) -> String {
    format!(
        "\
#!/bin/bash
#
# Runs during `boxer build` to push the committed image of container
# \"{name}\" to a remote registry (configure commit.sh first):
#
# docker push my-image-{name}
"
    )
}

fn dockerfile(name: &str) -> String {
    format!(
        "\
# Used by `boxer build` to build the image for container \"{name}\".
# Remove this file if the container uses a pre-built image.
"
    )
}

fn env_file(name: &str) -> String {
    format!(
        "SOME_ENV_VARIABLE_FOR_{upper}=value\n",
        upper = name.to_uppercase()
    )
}

/// Create the group directory and scaffold every requested container.
/// Fails without touching the filesystem if the group already exists.
pub fn run_init(group: &Group, containers: &[String]) -> Result<()> {
    if group.dir().exists() {
        return Err(Error::Config(format!(
            "path {} already exists",
            group.dir().display()
        )));
    }

    fs::create_dir(group.dir())?;
    fs::write(group.dir().join("build.header.yml"), BUILD_HEADER)?;
    fs::write(group.dir().join("build.footer.yml"), BUILD_FOOTER)?;
    fs::write(group.dir().join("run.header.yml"), RUN_HEADER)?;
    fs::write(group.dir().join("run.footer.yml"), RUN_FOOTER)?;

    for raw in containers {
        let name = raw.strip_prefix(BOX_PREFIX).unwrap_or(raw);
        let dir = group.dir().join(format!("{BOX_PREFIX}{name}"));
        fs::create_dir(&dir)?;
        fs::write(dir.join("build.yml"), build_yml(name))?;
        fs::write(dir.join("run.yml"), run_yml(name))?;
        fs::write(dir.join("checkout.sh"), checkout_sh(name))?;
        fs::write(dir.join("exec.sh"), exec_sh(name))?;
        fs::write(dir.join("commit.sh"), commit_sh(name))?;
        fs::write(dir.join("push.sh"), push_sh(name))?;
        fs::write(dir.join("Dockerfile"), dockerfile(name))?;
        fs::write(dir.join(format!("{name}.env")), env_file(name))?;
        fs::write(dir.join(".gitignore"), "app\n")?;
        fs::write(dir.join(".dockerignore"), ".git\n")?;
    }

    Ok(())
}
