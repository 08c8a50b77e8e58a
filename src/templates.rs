// Fixed file contents emitted by the generator. These are written to the
// scaffolded project verbatim; the only interpolated token anywhere is the
// project's folder name.

pub const MVP_MAIN: &str = r#"from app import app

if __name__ == '__main__':
    app.run(debug=True)
"#;

pub const MVP_APP_INIT: &str = r#"from flask import Flask

app = Flask(__name__)
app.config.from_mapping(
    SECRET_KEY='dev',
)

from app import views  # noqa: E402, F401
"#;

pub const MVP_VIEWS: &str = r#"from app import app
from flask import render_template

@app.route('/')
def index():
    return 'Hello Flask MVP!'
"#;

pub const MVP_AUTH: &str = r#"# Simple auth placeholder
def register_routes(app):
    pass
"#;

pub const MVP_MODELS: &str = "# Models for MVP — add SQLAlchemy models here if needed.\n";

pub const MVP_FORMS: &str = "# WTForms for simple MVP forms (if needed)\n";

pub fn mvp_layout(project: &str) -> String {
    format!(
        r#"<!doctype html>
<title>{project}</title>
<body>
  <h1>Welcome to {project} (MVP)</h1>
  {{% block content %}}{{% endblock %}}
</body>
"#
    )
}

pub const SAAS_RUN: &str = r#"from app import create_app

app = create_app()

if __name__ == '__main__':
    app.run(host='0.0.0.0', debug=True)
"#;

pub const SAAS_CONFIG: &str = r#"import os
basedir = os.path.abspath(os.path.dirname(__file__))

class BaseConfig:
    SECRET_KEY = os.environ.get('SECRET_KEY', 'dev')
    SQLALCHEMY_DATABASE_URI = os.environ.get('DB_URL', 'sqlite:///' + os.path.join(basedir, 'app.db'))
    SQLALCHEMY_TRACK_MODIFICATIONS = False
"#;

pub const SAAS_REQUIREMENTS: &str = "Flask\nFlask_SQLAlchemy\n";

// The factory registers feature blueprints behind an explicit module check,
// so a feature directory without a routes module is skipped rather than
// suppressed through a blanket except clause.
pub const SAAS_APP_INIT: &str = r#"from importlib import import_module, util

from flask import Flask

from .extensions import db

def create_app(config_object='config.BaseConfig'):
    app = Flask(__name__, instance_relative_config=False)
    app.config.from_object(config_object)

    # initialize extensions
    db.init_app(app)

    # register blueprints (auth + features)
    from .auth import routes as auth_routes
    app.register_blueprint(auth_routes.bp)

    # feature blueprints register only when a routes module exists
    for feature in ('Feature1', 'Feature2', 'Feature3'):
        if util.find_spec(f'app.{feature}.routes') is None:
            continue
        routes = import_module(f'app.{feature}.routes')
        app.register_blueprint(routes.bp)

    return app
"#;

pub const SAAS_EXTENSIONS: &str = r#"from flask_sqlalchemy import SQLAlchemy

db = SQLAlchemy()
"#;

pub const SAAS_AUTH_ROUTES: &str = r#"from flask import Blueprint, render_template

bp = Blueprint('auth', __name__, url_prefix='/auth')

@bp.route('/login')
def login():
    return 'Auth: login placeholder'
"#;

pub const SAAS_AUTH_MODELS: &str = r#"from app.extensions import db

# Add auth-related DB models here (User, Role, etc.)
"#;

pub const SAAS_AUTH_FORMS: &str = "# WTForms for auth forms\n";

pub fn feature_routes(feature: &str) -> String {
    let prefix = feature.to_lowercase();

    format!(
        r#"from flask import Blueprint

bp = Blueprint('{prefix}', __name__, url_prefix='/{prefix}')

@bp.route('/')
def index():
    return '{feature} home'
"#
    )
}

pub fn feature_models(feature: &str) -> String {
    format!(
        r#"from app.extensions import db

# Models for {feature}
"#
    )
}

pub fn feature_services(feature: &str) -> String {
    format!("# Business logic / services for {feature}\n")
}

pub const SAAS_TEST: &str = r#"def test_placeholder():
    assert True
"#;

pub fn saas_base(project: &str) -> String {
    format!(
        r#"<!doctype html>
<title>{project}</title>
<body>
  <header><h1>{project} (SAAS)</h1></header>
  {{% block body %}}{{% endblock %}}
</body>
"#
    )
}
