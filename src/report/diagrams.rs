//! ASCII diagrams of the CI/CD design, rendered in a monospace font

/// Figure 2.1: components from developer workstation to the Docker host
pub const ARCHITECTURE: &str = r#"
+============================================================================+
|                    SOUNDPLUS++ CI/CD ARCHITECTURE                          |
+============================================================================+

    +---------------+          +------------------+          +---------------+
    |   DEVELOPER   |  push    |     GITHUB       |  webhook |    JENKINS    |
    |   Workstation |--------->|   Repository     |--------->|    Server     |
    +---------------+          +------------------+          +---------------+
          |                           |                            |
          |                           | trigger                    | build
          v                           v                            v
    +---------------+          +------------------+          +---------------+
    |   Local Dev   |          |  GitHub Actions  |          |   Docker      |
    |   Environment |          |   CI Pipeline    |          |   Build       |
    +---------------+          +------------------+          +---------------+
                                      |                            |
                                      | push                       | push
                                      v                            v
                               +------------------+          +---------------+
                               |   DOCKER HUB     |<---------|   Docker      |
                               |   Registry       |          |   Images      |
                               +------------------+          +---------------+
                                      |
                                      | pull
                                      v
                   +------------------------------------------+
                   |           DEPLOYMENT TARGET              |
                   |  +----------------+  +----------------+  |
                   |  |   AWS EC2      |  |   Local VMs    |  |
                   |  |   Instance     |  |   (Docker)     |  |
                   |  +----------------+  +----------------+  |
                   +------------------------------------------+
                                      |
                                      v
                   +------------------------------------------+
                   |              DOCKER HOST                 |
                   |  +----------------+  +----------------+  |
                   |  |   Frontend     |  |   Backend      |  |
                   |  |   Container    |  |   Container    |  |
                   |  |   (Port 3000)  |  |   (Port 5000)  |  |
                   |  +----------------+  +----------------+  |
                   |             |              |             |
                   |             +------+-------+             |
                   |                    v                     |
                   |           +----------------+             |
                   |           | MongoDB Atlas  |             |
                   |           |   (Cloud DB)   |             |
                   |           +----------------+             |
                   +------------------------------------------+
"#;

/// Figure 2.2: commit to deployment, Jenkins stages 1 to 7
pub const PIPELINE_FLOW: &str = r#"
+============================================================================+
|                      CI/CD PIPELINE FLOW DIAGRAM                           |
+============================================================================+

  [Developer]
       |
       | git push
       v
  +----------+     +----------+     +----------+     +----------+
  |  COMMIT  |---->|  GITHUB  |---->| WEBHOOK  |---->| JENKINS  |
  |   Code   |     |   Repo   |     | Trigger  |     |  Server  |
  +----------+     +----------+     +----------+     +----------+
                                                           |
       +---------------------------------------------------+
       |
       v
  +============================================================================+
  |                         JENKINS PIPELINE STAGES                            |
  +============================================================================+
  |                                                                            |
  |  Stage 1         Stage 2          Stage 3         Stage 4                  |
  |  +---------+     +-----------+    +----------+    +------------+           |
  |  |CHECKOUT |---->|PRE-FLIGHT |---->| SETUP   |---->|   BUILD   |           |
  |  |  Code   |     |  Check    |    |   ENV    |    |  Images   |           |
  |  +---------+     +-----------+    +----------+    +------------+           |
  |                                                          |                 |
  |                                                          v                 |
  |  Stage 7         Stage 6          Stage 5                                  |
  |  +---------+     +-----------+    +------------+                           |
  |  | SUCCESS |<----|  VERIFY   |<---|   START    |                           |
  |  | Report  |     | Services  |    |  Services  |                           |
  |  +---------+     +-----------+    +------------+                           |
  |                                                                            |
  +============================================================================+
       |
       v
  +----------+     +----------+     +----------+
  | DOCKER   |---->| HEALTH   |---->| DEPLOY   |
  | Registry |     |  Check   |     | Complete |
  +----------+     +----------+     +----------+
"#;

/// Figure 2.3: containers, bridge network and volume mounts
pub const CONTAINERS: &str = r#"
+============================================================================+
|                   CONTAINER ARCHITECTURE DIAGRAM                           |
+============================================================================+

                            DOCKER HOST
+------------------------------------------------------------------------+
|                                                                        |
|   soundplus-network (bridge)                                           |
|   +----------------------------------------------------------------+   |
|   |                                                                |   |
|   |  +------------------------+      +------------------------+    |   |
|   |  |  soundplus-frontend    |      |  soundplus-backend     |    |   |
|   |  |  Container             |      |  Container             |    |   |
|   |  +------------------------+      +------------------------+    |   |
|   |  |                        |      |                        |    |   |
|   |  |  +------------------+  |      |  +------------------+  |    |   |
|   |  |  |   React App      |  |      |  |   Express.js     |  |    |   |
|   |  |  |   (Vite Dev)     |  | HTTP |  |   REST API       |  |    |   |
|   |  |  |                  |<-|------|->|                  |  |    |   |
|   |  |  |   Port: 3000     |  |      |  |   Port: 5000     |  |    |   |
|   |  |  +------------------+  |      |  +------------------+  |    |   |
|   |  |                        |      |         |              |    |   |
|   |  |  Node.js 18-slim       |      |  Node.js 18-slim       |    |   |
|   |  +------------------------+      +------------------------+    |   |
|   |           |                               |                    |   |
|   +-----------|-------------------------------|--------------------+   |
|               |                               |                        |
+---------------|-------------------------------|------------------------+
                |                               |
                v                               v
        +---------------+              +-----------------+
        |   User        |              |  MongoDB Atlas  |
        |   Browser     |              |  Cloud Database |
        |   :3000       |              |  (Sound_lk)     |
        +---------------+              +-----------------+

+------------------------------------------------------------------------+
|   VOLUME MOUNTS                                                        |
|   +------------------------+                                           |
|   |  backend-uploads       | --> /app/uploads (Product Images)         |
|   +------------------------+                                           |
+------------------------------------------------------------------------+
"#;

/// Figure 2.4: request path from browser to MongoDB collections
pub const CONNECTIVITY: &str = r#"
+============================================================================+
|                    COMPONENT CONNECTIVITY DIAGRAM                          |
+============================================================================+

   +------------------+                              +------------------+
   |     CLIENT       |                              |   ADMIN PANEL    |
   |     BROWSER      |                              |    (React)       |
   +--------+---------+                              +--------+---------+
            |                                                 |
            |  HTTP (Port 3000)                              |
            +---------------------+     +---------------------+
                                  |     |
                                  v     v
                         +------------------+
                         |    FRONTEND      |
                         |    CONTAINER     |
                         +------------------+
                         |  React 18.3.1    |
                         |  Vite 6.0.5      |
                         |  react-router    |
                         |  axios           |
                         +--------+---------+
                                  |
                                  | REST API Calls
                                  | (axios -> http://backend:5000)
                                  |
                                  v
                         +------------------+
                         |    BACKEND       |
                         |    CONTAINER     |
                         +------------------+
                         |  Express 4.21.2  |
                         |  JWT Auth        |
                         |  Multer          |
                         |  Mongoose 8.0.0  |
                         +--------+---------+
                                  |
                +-----------------|------------------+
                |                 |                  |
                v                 v                  v
      +-------------+    +---------------+    +-------------+
      | /api/auth   |    | /api/products |    | /api/orders |
      | Routes      |    | Routes        |    | Routes      |
      +-------------+    +---------------+    +-------------+
                |                 |                  |
                +-----------------|------------------+
                                  |
                                  | MongoDB Driver
                                  | (mongoose)
                                  v
                         +------------------+
                         |  MONGODB ATLAS   |
                         |  Cloud Database  |
                         +------------------+
                         |  Database:       |
                         |  Sound_lk        |
                         +------------------+
                         |  Collections:    |
                         |  - users         |
                         |  - products      |
                         |  - carts         |
                         |  - orders        |
                         +------------------+
"#;
